pub mod vehicle_parser;

pub use vehicle_parser::{Parser, VehicleCardParser, parse_price};
