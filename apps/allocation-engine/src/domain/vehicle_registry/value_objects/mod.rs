//! Vehicle registry value objects.

mod vehicle_status;

pub use vehicle_status::VehicleStatus;
