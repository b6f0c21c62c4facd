//! Vehicle aggregate.

mod vehicle;

pub use vehicle::{InvestmentVehicle, RegisterVehicleCommand};
