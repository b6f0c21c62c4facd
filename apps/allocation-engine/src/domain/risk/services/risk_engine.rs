//! Risk Engine
//!
//! Stateless risk arithmetic over vehicle and portfolio state. All
//! computations use integer basis-point arithmetic; every division
//! truncates toward zero so that identical inputs always reproduce
//! identical ledger state.

use crate::domain::shared::{Amount, BasisPoints, RiskScore, BP_SCALE};

/// Minimum share of the portfolio a single allocation must represent
/// to count as diversification-compliant: 1000bp = 10%.
pub const MIN_DIVERSIFICATION_BP: u64 = 1_000;

/// Pure risk computations.
pub struct RiskEngine;

impl RiskEngine {
    /// Risk contribution of an allocation: `amount * risk / total`.
    ///
    /// Returns zero when the portfolio total is zero. That is a policy
    /// choice, not an error: an empty portfolio has no exposure for an
    /// allocation to contribute to.
    #[must_use]
    pub fn risk_contribution(
        vehicle_risk: RiskScore,
        amount: Amount,
        portfolio_total: Amount,
    ) -> u64 {
        if portfolio_total.is_zero() {
            return 0;
        }
        let weighted = u128::from(amount.units()) * u128::from(vehicle_risk.value());
        u64::try_from(weighted / u128::from(portfolio_total.units())).unwrap_or(u64::MAX)
    }

    /// Value-at-Risk estimate for an allocation at a confidence level.
    ///
    /// `amount * (risk_score * confidence_bp / 10000) / 100`, truncating
    /// at each division step.
    #[must_use]
    pub fn value_at_risk(
        amount: Amount,
        risk_score: RiskScore,
        confidence: BasisPoints,
    ) -> Amount {
        let loss_pct = u64::from(risk_score.value()) * confidence.value() / BP_SCALE;
        let var = u128::from(amount.units()) * u128::from(loss_pct) / 100;
        Amount::new(u64::try_from(var).unwrap_or(u64::MAX))
    }

    /// Exposure ratio of an amount against the portfolio total, in
    /// basis points. `None` when the total is zero (the ratio is
    /// undefined against an empty base).
    #[must_use]
    pub fn exposure_ratio(amount: Amount, portfolio_total: Amount) -> Option<BasisPoints> {
        if portfolio_total.is_zero() {
            return None;
        }
        let ratio = u128::from(amount.units()) * u128::from(BP_SCALE)
            / u128::from(portfolio_total.units());
        Some(BasisPoints::new(u64::try_from(ratio).unwrap_or(u64::MAX)))
    }

    /// Diversification compliance: the new allocation must hold at
    /// least [`MIN_DIVERSIFICATION_BP`] of the portfolio.
    ///
    /// A zero-total portfolio is treated as automatically compliant
    /// (there is no prior exposure to diversify against).
    #[must_use]
    pub fn diversification_ok(new_allocation: Amount, portfolio_total: Amount) -> bool {
        match Self::exposure_ratio(new_allocation, portfolio_total) {
            None => true,
            Some(ratio) => ratio.value() >= MIN_DIVERSIFICATION_BP,
        }
    }
}
