//! Treasury update path
//!
//! Owns the three bounded-context aggregates and implements every
//! cross-entity operation. Each operation validates against current
//! state first and writes only after every check has passed, so a
//! failure leaves all state exactly as it was.
//!
//! The treasury assumes single-writer semantics: the hosting layer
//! serializes calls (see `AllocationService`), so no locking happens
//! here.

use crate::domain::portfolio::{LedgerSummary, PortfolioLedger};
use crate::domain::proposal_workflow::{
    InvestmentProposal, ProposalStateMachine, ProposalStatus, ProposalWorkflow,
    SubmitProposalCommand,
};
use crate::domain::risk::RiskEngine;
use crate::domain::shared::{
    Amount, BasisPoints, IdentityId, ProposalId, Rating, TreasuryError, VehicleId, BP_SCALE,
    CONSTRAINT_ALLOCATION_CEILING, CONSTRAINT_SINGLE_EXPOSURE_RATIO,
};
use crate::domain::vehicle_registry::{
    InvestmentVehicle, RegisterVehicleCommand, VehicleRegistry,
};

/// The treasury aggregate root: registry, workflow and ledger behind
/// one mutation surface.
#[derive(Debug, Clone)]
pub struct Treasury {
    registry: VehicleRegistry,
    workflow: ProposalWorkflow,
    ledger: PortfolioLedger,
    var_confidence: BasisPoints,
}

impl Treasury {
    /// Create an empty treasury.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` if the exposure limit exceeds
    /// 5000bp or the confidence level exceeds 10000bp.
    pub fn new(
        max_single_exposure: BasisPoints,
        var_confidence: BasisPoints,
    ) -> Result<Self, TreasuryError> {
        if var_confidence.value() > BP_SCALE {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "var_confidence_bp".to_string(),
                message: format!("confidence level {var_confidence} exceeds {BP_SCALE}bp"),
            });
        }
        Ok(Self {
            registry: VehicleRegistry::new(),
            workflow: ProposalWorkflow::new(),
            ledger: PortfolioLedger::new(max_single_exposure)?,
            var_confidence,
        })
    }

    /// Replace the single-exposure limit. The caller gates this behind
    /// administrator authorization.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` if the limit exceeds 5000bp.
    pub fn initialize(&mut self, max_single_exposure: BasisPoints) -> Result<(), TreasuryError> {
        self.ledger.set_max_single_exposure(max_single_exposure)
    }

    /// Register a new investment vehicle.
    ///
    /// # Errors
    ///
    /// Returns error if the registration command is invalid.
    pub fn register_vehicle(
        &mut self,
        cmd: RegisterVehicleCommand,
    ) -> Result<VehicleId, TreasuryError> {
        self.registry.register(cmd)
    }

    /// Record a performance observation on a vehicle. Feeds reporting
    /// only; no allocation or ledger change.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown vehicle, `InvalidAmount` for
    /// an out-of-range rating.
    pub fn update_performance(
        &mut self,
        vehicle_id: VehicleId,
        rating: u8,
        actual_return_bp: i64,
    ) -> Result<(), TreasuryError> {
        let rating = Rating::new(rating)?;
        let vehicle = self.registry.get_mut(vehicle_id)?;
        vehicle.record_performance(rating, actual_return_bp);
        Ok(())
    }

    /// Look up a vehicle.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub fn vehicle(&self, id: VehicleId) -> Result<&InvestmentVehicle, TreasuryError> {
        self.registry.get(id)
    }

    /// Look up a proposal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub fn proposal(&self, id: ProposalId) -> Result<&InvestmentProposal, TreasuryError> {
        self.workflow.get(id)
    }

    /// Iterate over all vehicles in id order.
    pub fn vehicles(&self) -> impl Iterator<Item = &InvestmentVehicle> {
        self.registry.iter()
    }

    /// Iterate over all proposals in id order.
    pub fn proposals(&self) -> impl Iterator<Item = &InvestmentProposal> {
        self.workflow.iter()
    }

    /// Submit a proposal against an active vehicle, snapshotting its
    /// current risk score.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown vehicle, `InvalidAllocation`
    /// if the vehicle is suspended, `InvalidAmount` for an invalid
    /// command.
    pub fn submit_proposal(
        &mut self,
        cmd: SubmitProposalCommand,
    ) -> Result<ProposalId, TreasuryError> {
        let vehicle = self.registry.get(cmd.vehicle_id)?;
        if !vehicle.is_active() {
            return Err(TreasuryError::InvalidAllocation {
                message: format!("vehicle {} is suspended", vehicle.id()),
            });
        }
        let risk_snapshot = vehicle.risk_score();
        self.workflow.submit(cmd, risk_snapshot)
    }

    /// Approve a pending proposal and apply its allocation.
    ///
    /// Validation order: proposal exists and is pending, the approved
    /// amount is positive and within the proposed amount, the vehicle
    /// is active, the ceiling holds, the exposure ratio holds. Only
    /// then are the proposal, the vehicle and the ledger mutated, as
    /// one unit.
    ///
    /// # Errors
    ///
    /// `NotFound`, `InvalidStateTransition`, `InvalidAmount`,
    /// `InvalidAllocation` or `ExposureLimitExceeded` per the checks
    /// above. State is unchanged on any failure.
    pub fn approve_proposal(
        &mut self,
        proposal_id: ProposalId,
        approved_amount: Amount,
        processor: IdentityId,
    ) -> Result<Amount, TreasuryError> {
        let proposal = self.workflow.get(proposal_id)?;
        ProposalStateMachine::validate_transition(proposal.status(), ProposalStatus::Approved)?;
        if approved_amount.is_zero() {
            return Err(TreasuryError::InvalidAmount {
                field: "approved_amount".to_string(),
                message: "approved amount must be positive".to_string(),
            });
        }
        if approved_amount > proposal.amount() {
            return Err(TreasuryError::InvalidAmount {
                field: "approved_amount".to_string(),
                message: format!(
                    "approved amount {approved_amount} exceeds proposed amount {}",
                    proposal.amount()
                ),
            });
        }

        let vehicle_id = proposal.vehicle_id();
        let vehicle = self.registry.get(vehicle_id)?;
        if !vehicle.is_active() {
            return Err(TreasuryError::InvalidAllocation {
                message: format!("vehicle {vehicle_id} is suspended"),
            });
        }

        let new_allocation = vehicle
            .current_allocation()
            .checked_add(approved_amount)
            .ok_or_else(|| TreasuryError::InvalidAllocation {
                message: format!(
                    "allocation overflow adding {approved_amount} to {}",
                    vehicle.current_allocation()
                ),
            })?;
        self.check_ceiling(vehicle, new_allocation)?;
        self.check_exposure_ratio(approved_amount)?;
        let new_total = self.checked_new_total(approved_amount)?;

        // All checks passed; commit.
        self.workflow
            .get_mut(proposal_id)?
            .approve(approved_amount, processor)?;
        self.registry.get_mut(vehicle_id)?.set_allocation(new_allocation)?;
        self.ledger.credit(approved_amount)?;
        self.refresh_var(vehicle_id, new_allocation, new_total);
        Ok(approved_amount)
    }

    /// Reject a pending proposal, recording the reason. No allocation
    /// or ledger change.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown proposal,
    /// `InvalidStateTransition` unless pending.
    pub fn reject_proposal(
        &mut self,
        proposal_id: ProposalId,
        reason: impl Into<String>,
        processor: IdentityId,
    ) -> Result<(), TreasuryError> {
        self.workflow.get_mut(proposal_id)?.reject(reason, processor)
    }

    /// Set a vehicle's allocation to an absolute value, adjusting the
    /// portfolio total by exactly the delta.
    ///
    /// Increases are subject to the same ceiling and exposure-ratio
    /// checks as approval and require an active vehicle. Decreases are
    /// always permitted, including on suspended vehicles, so capital
    /// can be unwound.
    ///
    /// # Errors
    ///
    /// `NotFound`, `InvalidAllocation` or `ExposureLimitExceeded` per
    /// the checks above. State is unchanged on any failure.
    pub fn rebalance(
        &mut self,
        vehicle_id: VehicleId,
        new_allocation: Amount,
    ) -> Result<(), TreasuryError> {
        let vehicle = self.registry.get(vehicle_id)?;
        let current = vehicle.current_allocation();

        if new_allocation > current {
            if !vehicle.is_active() {
                return Err(TreasuryError::InvalidAllocation {
                    message: format!(
                        "vehicle {vehicle_id} is suspended, allocation cannot increase"
                    ),
                });
            }
            self.check_ceiling(vehicle, new_allocation)?;
            let delta = Amount::new(new_allocation.units() - current.units());
            self.check_exposure_ratio(delta)?;
            let new_total = self.checked_new_total(delta)?;

            self.registry.get_mut(vehicle_id)?.set_allocation(new_allocation)?;
            self.ledger.credit(delta)?;
            self.refresh_var(vehicle_id, new_allocation, new_total);
        } else {
            let delta = Amount::new(current.units() - new_allocation.units());
            let new_total = Amount::new(
                self.ledger.total_value().units().saturating_sub(delta.units()),
            );

            self.registry.get_mut(vehicle_id)?.set_allocation(new_allocation)?;
            self.ledger.debit(delta)?;
            self.refresh_var(vehicle_id, new_allocation, new_total);
        }
        Ok(())
    }

    /// Suspend a vehicle so it stops accepting proposals.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown vehicle,
    /// `InvalidStateTransition` if already suspended.
    pub fn suspend_vehicle(&mut self, vehicle_id: VehicleId) -> Result<(), TreasuryError> {
        self.registry.get_mut(vehicle_id)?.suspend()
    }

    /// Reactivate a suspended vehicle.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown vehicle,
    /// `InvalidStateTransition` if already active.
    pub fn reactivate_vehicle(&mut self, vehicle_id: VehicleId) -> Result<(), TreasuryError> {
        self.registry.get_mut(vehicle_id)?.reactivate()
    }

    /// Snapshot the portfolio ledger.
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    /// Diversification compliance of a prospective allocation against
    /// the current portfolio total.
    #[must_use]
    pub fn diversification_ok(&self, new_allocation: Amount) -> bool {
        RiskEngine::diversification_ok(new_allocation, self.ledger.total_value())
    }

    fn check_ceiling(
        &self,
        vehicle: &InvestmentVehicle,
        new_allocation: Amount,
    ) -> Result<(), TreasuryError> {
        if new_allocation > vehicle.allocation_ceiling() {
            return Err(TreasuryError::ExposureLimitExceeded {
                constraint: CONSTRAINT_ALLOCATION_CEILING.to_string(),
                limit: vehicle.allocation_ceiling().units(),
                observed: new_allocation.units(),
            });
        }
        Ok(())
    }

    // Ratio of the increment against the pre-mutation total. Skipped
    // when the total is zero: the first allocation cannot exceed a
    // ratio of an empty base. Policy inherited from the original guard
    // clauses, pending product sign-off.
    fn check_exposure_ratio(&self, increment: Amount) -> Result<(), TreasuryError> {
        let Some(ratio) = RiskEngine::exposure_ratio(increment, self.ledger.total_value()) else {
            return Ok(());
        };
        let limit = self.ledger.max_single_exposure();
        if ratio.value() > limit.value() {
            return Err(TreasuryError::ExposureLimitExceeded {
                constraint: CONSTRAINT_SINGLE_EXPOSURE_RATIO.to_string(),
                limit: limit.value(),
                observed: ratio.value(),
            });
        }
        Ok(())
    }

    fn checked_new_total(&self, increment: Amount) -> Result<Amount, TreasuryError> {
        self.ledger
            .total_value()
            .checked_add(increment)
            .ok_or_else(|| TreasuryError::InvalidAllocation {
                message: format!(
                    "portfolio total overflow adding {increment} to {}",
                    self.ledger.total_value()
                ),
            })
    }

    // current_var is the VaR of the allocation just mutated, at the
    // configured confidence level, as a share of the new total.
    fn refresh_var(&mut self, vehicle_id: VehicleId, new_allocation: Amount, new_total: Amount) {
        let Ok(vehicle) = self.registry.get(vehicle_id) else {
            return;
        };
        let var_amount =
            RiskEngine::value_at_risk(new_allocation, vehicle.risk_score(), self.var_confidence);
        let var_bp =
            RiskEngine::exposure_ratio(var_amount, new_total).unwrap_or(BasisPoints::ZERO);
        self.ledger.record_var(var_bp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_treasury() -> Treasury {
        Treasury::new(BasisPoints::new(2_500), BasisPoints::new(9_500)).unwrap()
    }

    fn vehicle_command(name: &str, ceiling: u64) -> RegisterVehicleCommand {
        RegisterVehicleCommand {
            name: name.to_string(),
            category: "bond-ladder".to_string(),
            risk_score: 35,
            expected_return_bp: 450,
            liquidity_rating: 80,
            allocation_ceiling: Amount::new(ceiling),
        }
    }

    fn proposal_command(vehicle_id: VehicleId, amount: u64) -> SubmitProposalCommand {
        SubmitProposalCommand {
            proposer: IdentityId::new("analyst-1"),
            vehicle_id,
            amount: Amount::new(amount),
            rationale: "deploy idle reserves".to_string(),
            expected_roi_bp: 450,
        }
    }

    fn treasurer() -> IdentityId {
        IdentityId::new("treasurer-1")
    }

    #[test]
    fn treasury_new_rejects_bad_parameters() {
        assert!(Treasury::new(BasisPoints::new(5_001), BasisPoints::new(9_500)).is_err());
        assert!(Treasury::new(BasisPoints::new(2_500), BasisPoints::new(10_001)).is_err());
    }

    #[test]
    fn first_approval_skips_exposure_ratio() {
        // ceiling=1000, current=0, proposal for 800 at zero base.
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 800)).unwrap();

        let approved = treasury
            .approve_proposal(pid, Amount::new(800), treasurer())
            .unwrap();

        assert_eq!(approved, Amount::new(800));
        assert_eq!(treasury.vehicle(vid).unwrap().current_allocation(), Amount::new(800));
        assert_eq!(treasury.summary().total_value, Amount::new(800));
        assert_eq!(
            treasury.proposal(pid).unwrap().status(),
            ProposalStatus::Approved
        );
    }

    #[test]
    fn approval_above_ceiling_fails_unchanged() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 500)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 500)).unwrap();
        treasury.approve_proposal(pid, Amount::new(500), treasurer()).unwrap();

        // 100 more would pass the ratio gate but not the ceiling.
        let pid2 = treasury.submit_proposal(proposal_command(vid, 100)).unwrap();
        let before = treasury.summary();
        let err = treasury
            .approve_proposal(pid2, Amount::new(100), treasurer())
            .unwrap_err();

        assert!(matches!(err, TreasuryError::ExposureLimitExceeded { .. }));
        assert_eq!(treasury.summary(), before);
        assert_eq!(
            treasury.proposal(pid2).unwrap().status(),
            ProposalStatus::Pending
        );
    }

    #[test]
    fn approval_above_exposure_ratio_fails() {
        let mut treasury = make_treasury();
        let a = treasury.register_vehicle(vehicle_command("A", 10_000)).unwrap();
        let b = treasury.register_vehicle(vehicle_command("B", 10_000)).unwrap();

        let seed = treasury.submit_proposal(proposal_command(a, 1_000)).unwrap();
        treasury.approve_proposal(seed, Amount::new(1_000), treasurer()).unwrap();

        // 300 * 10000 / 1000 = 3000bp > 2500bp limit.
        let pid = treasury.submit_proposal(proposal_command(b, 300)).unwrap();
        let err = treasury
            .approve_proposal(pid, Amount::new(300), treasurer())
            .unwrap_err();
        assert!(matches!(
            err,
            TreasuryError::ExposureLimitExceeded { limit: 2_500, observed: 3_000, .. }
        ));

        // 250 * 10000 / 1000 = 2500bp, at the limit.
        let pid = treasury.submit_proposal(proposal_command(b, 250)).unwrap();
        treasury.approve_proposal(pid, Amount::new(250), treasurer()).unwrap();
        assert_eq!(treasury.summary().total_value, Amount::new(1_250));
    }

    #[test]
    fn approve_more_than_proposed_fails() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 500)).unwrap();

        let before = treasury.summary();
        let err = treasury
            .approve_proposal(pid, Amount::new(501), treasurer())
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAmount { .. }));
        assert_eq!(treasury.summary(), before);
    }

    #[test]
    fn approve_twice_fails() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 400)).unwrap();
        treasury.approve_proposal(pid, Amount::new(400), treasurer()).unwrap();

        let err = treasury
            .approve_proposal(pid, Amount::new(400), treasurer())
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidStateTransition { .. }));
        assert_eq!(treasury.summary().total_value, Amount::new(400));
    }

    #[test]
    fn reject_then_approve_fails() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 400)).unwrap();
        treasury.reject_proposal(pid, "too risky", treasurer()).unwrap();

        let err = treasury
            .approve_proposal(pid, Amount::new(400), treasurer())
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidStateTransition { .. }));
        assert_eq!(treasury.summary().total_value, Amount::ZERO);
        assert_eq!(
            treasury.proposal(pid).unwrap().processing_note(),
            Some("too risky")
        );
    }

    #[test]
    fn submit_against_suspended_vehicle_fails() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        treasury.suspend_vehicle(vid).unwrap();

        let err = treasury.submit_proposal(proposal_command(vid, 100)).unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAllocation { .. }));

        treasury.reactivate_vehicle(vid).unwrap();
        assert!(treasury.submit_proposal(proposal_command(vid, 100)).is_ok());
    }

    #[test]
    fn approve_after_suspension_fails() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 100)).unwrap();
        treasury.suspend_vehicle(vid).unwrap();

        let err = treasury
            .approve_proposal(pid, Amount::new(100), treasurer())
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAllocation { .. }));
        assert_eq!(
            treasury.proposal(pid).unwrap().status(),
            ProposalStatus::Pending
        );
    }

    #[test]
    fn submit_against_unknown_vehicle_fails() {
        let mut treasury = make_treasury();
        let err = treasury
            .submit_proposal(proposal_command(VehicleId::new(42), 100))
            .unwrap_err();
        assert!(matches!(err, TreasuryError::NotFound { .. }));
    }

    #[test]
    fn risk_snapshot_survives_later_vehicle_updates() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 100)).unwrap();

        treasury.update_performance(vid, 90, 520).unwrap();
        assert_eq!(treasury.proposal(pid).unwrap().risk_snapshot().value(), 35);
        assert_eq!(treasury.vehicle(vid).unwrap().performance_rating().value(), 90);
    }

    #[test]
    fn rebalance_down_adjusts_total_by_exact_delta() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 800)).unwrap();
        treasury.approve_proposal(pid, Amount::new(800), treasurer()).unwrap();

        treasury.rebalance(vid, Amount::new(300)).unwrap();

        assert_eq!(treasury.vehicle(vid).unwrap().current_allocation(), Amount::new(300));
        // Total decreased by exactly 500.
        assert_eq!(treasury.summary().total_value, Amount::new(300));
    }

    #[test]
    fn rebalance_up_is_ratio_checked() {
        let mut treasury = make_treasury();
        let a = treasury.register_vehicle(vehicle_command("A", 10_000)).unwrap();
        let b = treasury.register_vehicle(vehicle_command("B", 10_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(a, 1_000)).unwrap();
        treasury.approve_proposal(pid, Amount::new(1_000), treasurer()).unwrap();

        // Increment of 300 against a base of 1000 exceeds 2500bp.
        let err = treasury.rebalance(b, Amount::new(300)).unwrap_err();
        assert!(matches!(err, TreasuryError::ExposureLimitExceeded { .. }));
        assert_eq!(treasury.vehicle(b).unwrap().current_allocation(), Amount::ZERO);
        assert_eq!(treasury.summary().total_value, Amount::new(1_000));

        treasury.rebalance(b, Amount::new(250)).unwrap();
        assert_eq!(treasury.summary().total_value, Amount::new(1_250));
    }

    #[test]
    fn rebalance_above_ceiling_fails_unchanged() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();

        let err = treasury.rebalance(vid, Amount::new(1_001)).unwrap_err();
        assert!(matches!(err, TreasuryError::ExposureLimitExceeded { .. }));
        assert_eq!(treasury.summary().total_value, Amount::ZERO);
    }

    #[test]
    fn rebalance_down_on_suspended_vehicle_is_allowed() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 800)).unwrap();
        treasury.approve_proposal(pid, Amount::new(800), treasurer()).unwrap();
        treasury.suspend_vehicle(vid).unwrap();

        treasury.rebalance(vid, Amount::new(100)).unwrap();
        assert_eq!(treasury.summary().total_value, Amount::new(100));

        let err = treasury.rebalance(vid, Amount::new(200)).unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAllocation { .. }));
    }

    #[test]
    fn var_recomputed_on_mutation() {
        let mut treasury = make_treasury();
        let vid = treasury.register_vehicle(vehicle_command("A", 10_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 1_000)).unwrap();
        treasury.approve_proposal(pid, Amount::new(1_000), treasurer()).unwrap();

        // risk 35, confidence 9500: loss_pct = 35*9500/10000 = 33;
        // var = 1000*33/100 = 330; 330/1000 = 3300bp of the total.
        assert_eq!(treasury.summary().current_var, BasisPoints::new(3_300));

        treasury.rebalance(vid, Amount::ZERO).unwrap();
        assert_eq!(treasury.summary().current_var, BasisPoints::ZERO);
    }

    #[test]
    fn initialize_replaces_exposure_limit() {
        let mut treasury = make_treasury();
        treasury.initialize(BasisPoints::new(4_000)).unwrap();
        assert_eq!(treasury.summary().max_single_exposure, BasisPoints::new(4_000));

        assert!(treasury.initialize(BasisPoints::new(5_001)).is_err());
        assert_eq!(treasury.summary().max_single_exposure, BasisPoints::new(4_000));
    }

    #[test]
    fn diversification_passthrough_uses_ledger_total() {
        let mut treasury = make_treasury();
        assert!(treasury.diversification_ok(Amount::new(1)));

        let vid = treasury.register_vehicle(vehicle_command("A", 10_000)).unwrap();
        let pid = treasury.submit_proposal(proposal_command(vid, 1_000)).unwrap();
        treasury.approve_proposal(pid, Amount::new(1_000), treasurer()).unwrap();

        assert!(treasury.diversification_ok(Amount::new(100)));
        assert!(!treasury.diversification_ok(Amount::new(99)));
    }

    proptest! {
        // Whatever sequence of approvals and rebalances runs, the
        // ledger total equals the sum of vehicle allocations and no
        // allocation exceeds its ceiling.
        #[test]
        fn ledger_total_matches_allocation_sum(
            ceilings in proptest::collection::vec(1u64..5_000, 1..5),
            moves in proptest::collection::vec((0usize..5, 0u64..6_000), 0..20),
        ) {
            let mut treasury =
                Treasury::new(BasisPoints::new(5_000), BasisPoints::new(9_500)).unwrap();
            let ids: Vec<_> = ceilings
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    treasury
                        .register_vehicle(vehicle_command(&format!("V{i}"), c))
                        .unwrap()
                })
                .collect();

            for (idx, target) in moves {
                let vid = ids[idx % ids.len()];
                let _ = treasury.rebalance(vid, Amount::new(target));
            }

            let total: u64 = treasury
                .vehicles()
                .map(|v| v.current_allocation().units())
                .sum();
            prop_assert_eq!(treasury.summary().total_value.units(), total);
            for v in treasury.vehicles() {
                prop_assert!(v.current_allocation() <= v.allocation_ceiling());
            }
        }

        // A failing approval leaves every observable field unchanged.
        #[test]
        fn failed_approval_leaves_state_unchanged(over in 1u64..1_000) {
            let mut treasury = make_treasury();
            let vid = treasury.register_vehicle(vehicle_command("A", 1_000)).unwrap();
            let pid = treasury.submit_proposal(proposal_command(vid, 500)).unwrap();

            let vehicle_before = treasury.vehicle(vid).unwrap().clone();
            let proposal_before = treasury.proposal(pid).unwrap().clone();
            let summary_before = treasury.summary();

            let result =
                treasury.approve_proposal(pid, Amount::new(500 + over), treasurer());
            prop_assert!(result.is_err());

            prop_assert_eq!(treasury.vehicle(vid).unwrap(), &vehicle_before);
            prop_assert_eq!(treasury.proposal(pid).unwrap(), &proposal_before);
            prop_assert_eq!(treasury.summary(), summary_before);
        }
    }
}
