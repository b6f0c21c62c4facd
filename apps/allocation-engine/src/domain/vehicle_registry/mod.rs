//! Vehicle Registry bounded context.
//!
//! Owns investment vehicle records: registration, performance updates,
//! and lifecycle status. Allocation mutations flow through the treasury
//! update path, never directly through callers.

pub mod aggregate;
pub mod registry;
pub mod value_objects;

pub use aggregate::{InvestmentVehicle, RegisterVehicleCommand};
pub use registry::VehicleRegistry;
pub use value_objects::VehicleStatus;
