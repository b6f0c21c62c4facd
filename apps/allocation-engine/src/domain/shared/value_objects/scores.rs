//! Bounded 0-100 score value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::errors::TreasuryError;

/// Upper bound for risk scores and ratings.
pub const MAX_SCORE: u8 = 100;

/// A vehicle risk score in the range 0-100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Create a risk score, rejecting values above 100.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` if the score exceeds 100.
    pub fn new(score: u8) -> Result<Self, TreasuryError> {
        if score > MAX_SCORE {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "risk_score".to_string(),
                message: format!("risk score {score} exceeds maximum {MAX_SCORE}"),
            });
        }
        Ok(Self(score))
    }

    /// Get the raw score.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A performance or liquidity rating in the range 0-100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values above 100.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the rating exceeds 100.
    pub fn new(rating: u8) -> Result<Self, TreasuryError> {
        if rating > MAX_SCORE {
            return Err(TreasuryError::InvalidAmount {
                field: "rating".to_string(),
                message: format!("rating {rating} exceeds maximum {MAX_SCORE}"),
            });
        }
        Ok(Self(rating))
    }

    /// Get the raw rating.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
