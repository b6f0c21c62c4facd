//! Shared value objects used across bounded contexts.

mod amount;
mod basis_points;
mod identifiers;
mod scores;
mod timestamp;

pub use amount::Amount;
pub use basis_points::{BasisPoints, BP_SCALE};
pub use identifiers::{IdentityId, ProposalId, VehicleId};
pub use scores::{Rating, RiskScore, MAX_SCORE};
pub use timestamp::Timestamp;
