pub mod booking_viewmodel;

pub use booking_viewmodel::{compute_quote, format_duration, format_price, parse_form_date};
