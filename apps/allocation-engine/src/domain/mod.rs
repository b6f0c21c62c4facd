//! Domain layer: bounded contexts and the treasury update path.
//!
//! - `shared`: value objects and the error taxonomy
//! - `vehicle_registry`: investment vehicle records and lifecycle
//! - `risk`: pure exposure and VaR arithmetic
//! - `proposal_workflow`: proposal approval state machine
//! - `portfolio`: portfolio-level running totals
//! - `treasury`: the single cross-context mutation surface

pub mod portfolio;
pub mod proposal_workflow;
pub mod risk;
pub mod shared;
pub mod treasury;
pub mod vehicle_registry;

pub use treasury::Treasury;
