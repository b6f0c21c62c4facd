//! Vehicle lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an investment vehicle.
///
/// Vehicles are never physically removed; decommissioning is modeled as
/// a transition to `Suspended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    /// Vehicle accepts new proposals and allocation changes.
    Active,
    /// Vehicle is decommissioned; no new proposals may target it.
    Suspended,
}

impl VehicleStatus {
    /// Returns true if the vehicle accepts new proposals.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Suspended => write!(f, "SUSPENDED"),
        }
    }
}
