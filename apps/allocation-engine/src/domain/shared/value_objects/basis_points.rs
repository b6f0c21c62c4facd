//! Basis-point ratio value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of basis points in 100%.
pub const BP_SCALE: u64 = 10_000;

/// A ratio expressed in basis points (1 bp = 0.01%).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u64);

impl BasisPoints {
    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const FULL: Self = Self(BP_SCALE);

    /// Create a basis-point value.
    #[must_use]
    pub const fn new(bp: u64) -> Self {
        Self(bp)
    }

    /// Get the raw basis-point value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

impl From<u64> for BasisPoints {
    fn from(bp: u64) -> Self {
        Self(bp)
    }
}

impl From<BasisPoints> for u64 {
    fn from(bp: BasisPoints) -> Self {
        bp.0
    }
}
