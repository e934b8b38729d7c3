// Validator module: booking field rules and the form entry point.

pub mod booking;
pub mod rules;

pub use booking::{BookingValidator, Validator, validate_booking_form};
