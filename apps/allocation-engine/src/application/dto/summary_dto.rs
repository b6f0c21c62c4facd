//! Portfolio summary projection.

use serde::{Deserialize, Serialize};

use crate::domain::portfolio::LedgerSummary;

/// Flat portfolio summary handed to the reporting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummaryDto {
    /// Portfolio total value in currency units.
    pub total_value: u64,
    /// Configured single-exposure limit in basis points.
    pub max_single_exposure_bp: u64,
    /// Value-at-risk after the most recent mutation, in basis points.
    pub current_var_bp: u64,
}

impl From<LedgerSummary> for PortfolioSummaryDto {
    fn from(summary: LedgerSummary) -> Self {
        Self {
            total_value: summary.total_value.units(),
            max_single_exposure_bp: summary.max_single_exposure.value(),
            current_var_bp: summary.current_var.value(),
        }
    }
}
