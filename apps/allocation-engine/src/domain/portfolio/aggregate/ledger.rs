//! Portfolio Ledger Aggregate
//!
//! Running totals for the whole portfolio. The total is maintained by
//! incremental deltas only; it is never recomputed by summing vehicle
//! allocations.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Amount, BasisPoints, TreasuryError};

/// Upper bound for the single-exposure limit, in basis points.
pub const MAX_SINGLE_EXPOSURE_CAP_BP: u64 = 5_000;

/// Portfolio-level running state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioLedger {
    total_value: Amount,
    max_single_exposure: BasisPoints,
    current_var: BasisPoints,
}

impl PortfolioLedger {
    /// Create an empty ledger with the given single-exposure limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` if the limit exceeds
    /// [`MAX_SINGLE_EXPOSURE_CAP_BP`].
    pub fn new(max_single_exposure: BasisPoints) -> Result<Self, TreasuryError> {
        if max_single_exposure.value() > MAX_SINGLE_EXPOSURE_CAP_BP {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "max_single_exposure_bp".to_string(),
                message: format!(
                    "single-exposure limit {max_single_exposure} exceeds \
                     {MAX_SINGLE_EXPOSURE_CAP_BP}bp"
                ),
            });
        }
        Ok(Self {
            total_value: Amount::ZERO,
            max_single_exposure,
            current_var: BasisPoints::ZERO,
        })
    }

    /// Get the portfolio total value.
    #[must_use]
    pub const fn total_value(&self) -> Amount {
        self.total_value
    }

    /// Get the single-exposure limit.
    #[must_use]
    pub const fn max_single_exposure(&self) -> BasisPoints {
        self.max_single_exposure
    }

    /// Get the most recently computed value-at-risk figure.
    #[must_use]
    pub const fn current_var(&self) -> BasisPoints {
        self.current_var
    }

    /// Apply a positive delta to the total.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAllocation` on overflow.
    pub fn credit(&mut self, delta: Amount) -> Result<(), TreasuryError> {
        self.total_value =
            self.total_value
                .checked_add(delta)
                .ok_or_else(|| TreasuryError::InvalidAllocation {
                    message: format!(
                        "portfolio total overflow adding {delta} to {}",
                        self.total_value
                    ),
                })?;
        Ok(())
    }

    /// Apply a negative delta to the total.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAllocation` if the delta exceeds the total. The
    /// total can only ever hold what allocations put in, so underflow
    /// means a bookkeeping bug upstream.
    pub fn debit(&mut self, delta: Amount) -> Result<(), TreasuryError> {
        self.total_value =
            self.total_value
                .checked_sub(delta)
                .ok_or_else(|| TreasuryError::InvalidAllocation {
                    message: format!(
                        "portfolio total underflow removing {delta} from {}",
                        self.total_value
                    ),
                })?;
        Ok(())
    }

    /// Record the value-at-risk figure computed after a mutation.
    pub fn record_var(&mut self, var: BasisPoints) {
        self.current_var = var;
    }

    /// Replace the single-exposure limit. Administrator-gated by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` if the limit exceeds
    /// [`MAX_SINGLE_EXPOSURE_CAP_BP`].
    pub fn set_max_single_exposure(
        &mut self,
        max_single_exposure: BasisPoints,
    ) -> Result<(), TreasuryError> {
        if max_single_exposure.value() > MAX_SINGLE_EXPOSURE_CAP_BP {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "max_single_exposure_bp".to_string(),
                message: format!(
                    "single-exposure limit {max_single_exposure} exceeds \
                     {MAX_SINGLE_EXPOSURE_CAP_BP}bp"
                ),
            });
        }
        self.max_single_exposure = max_single_exposure;
        Ok(())
    }

    /// Snapshot the ledger for reporting.
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            total_value: self.total_value,
            max_single_exposure: self.max_single_exposure,
            current_var: self.current_var,
        }
    }
}

/// Read-only projection of the ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Portfolio total value.
    pub total_value: Amount,
    /// Configured single-exposure limit.
    pub max_single_exposure: BasisPoints,
    /// Value-at-risk after the most recent mutation.
    pub current_var: BasisPoints,
}
