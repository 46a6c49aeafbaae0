pub mod bike;
pub mod booking;

pub use bike::{Availability, BikeDetails};
pub use booking::{BookingSelection, Quote, RentalType};
