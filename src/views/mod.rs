pub mod bike_details;

pub use bike_details::{render_bike_details, render_bike_error, render_bike_loading};
