//! Shared domain kernel: value objects and the error taxonomy.

pub mod errors;
pub mod value_objects;

pub use errors::{
    TreasuryError, CONSTRAINT_ALLOCATION_CEILING, CONSTRAINT_SINGLE_EXPOSURE_RATIO,
};
pub use value_objects::{
    Amount, BasisPoints, IdentityId, ProposalId, Rating, RiskScore, Timestamp, VehicleId, BP_SCALE,
    MAX_SCORE,
};
