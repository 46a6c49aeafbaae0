pub mod gateway;

pub use gateway::{HttpGateway, RentalGateway, SimulatedGateway};
