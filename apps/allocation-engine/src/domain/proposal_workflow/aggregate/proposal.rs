//! Investment Proposal Aggregate Root
//!
//! A proposal requests an allocation change for one vehicle and moves
//! through `Pending -> {Approved, Rejected}` exactly once.

use serde::{Deserialize, Serialize};

use crate::domain::proposal_workflow::services::ProposalStateMachine;
use crate::domain::proposal_workflow::value_objects::ProposalStatus;
use crate::domain::shared::{
    Amount, IdentityId, ProposalId, RiskScore, Timestamp, TreasuryError, VehicleId,
};

/// Command to submit a new proposal.
#[derive(Debug, Clone)]
pub struct SubmitProposalCommand {
    /// Identity of the proposer.
    pub proposer: IdentityId,
    /// Vehicle the proposal targets.
    pub vehicle_id: VehicleId,
    /// Requested allocation amount; must be positive.
    pub amount: Amount,
    /// Free-text rationale for the request.
    pub rationale: String,
    /// Expected return on investment in basis points.
    pub expected_roi_bp: i64,
}

impl SubmitProposalCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a zero amount or empty rationale.
    pub fn validate(&self) -> Result<(), TreasuryError> {
        if self.amount.is_zero() {
            return Err(TreasuryError::InvalidAmount {
                field: "amount".to_string(),
                message: "proposed amount must be positive".to_string(),
            });
        }
        if self.rationale.trim().is_empty() {
            return Err(TreasuryError::InvalidAmount {
                field: "rationale".to_string(),
                message: "rationale must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Investment Proposal Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProposal {
    id: ProposalId,
    proposer: IdentityId,
    vehicle_id: VehicleId,
    amount: Amount,
    rationale: String,
    // Copied from the vehicle at submission time; deliberately not
    // re-read at approval so the decision record reflects what the
    // proposer saw.
    risk_snapshot: RiskScore,
    expected_roi_bp: i64,
    status: ProposalStatus,
    approved_amount: Amount,
    created_at: Timestamp,
    processed_at: Option<Timestamp>,
    processed_by: Option<IdentityId>,
    processing_note: Option<String>,
}

impl InvestmentProposal {
    /// Create a pending proposal from a validated command.
    ///
    /// `risk_snapshot` is the vehicle's risk score at submission time.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(
        id: ProposalId,
        cmd: SubmitProposalCommand,
        risk_snapshot: RiskScore,
    ) -> Result<Self, TreasuryError> {
        cmd.validate()?;
        Ok(Self {
            id,
            proposer: cmd.proposer,
            vehicle_id: cmd.vehicle_id,
            amount: cmd.amount,
            rationale: cmd.rationale,
            risk_snapshot,
            expected_roi_bp: cmd.expected_roi_bp,
            status: ProposalStatus::Pending,
            approved_amount: Amount::ZERO,
            created_at: Timestamp::now(),
            processed_at: None,
            processed_by: None,
            processing_note: None,
        })
    }

    /// Get the proposal id.
    #[must_use]
    pub const fn id(&self) -> ProposalId {
        self.id
    }

    /// Get the proposer identity.
    #[must_use]
    pub const fn proposer(&self) -> &IdentityId {
        &self.proposer
    }

    /// Get the referenced vehicle id.
    #[must_use]
    pub const fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    /// Get the proposed amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Get the rationale text.
    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// Get the risk score snapshot taken at submission.
    #[must_use]
    pub const fn risk_snapshot(&self) -> RiskScore {
        self.risk_snapshot
    }

    /// Get the expected ROI in basis points.
    #[must_use]
    pub const fn expected_roi_bp(&self) -> i64 {
        self.expected_roi_bp
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> ProposalStatus {
        self.status
    }

    /// Get the approved amount (zero until approved).
    #[must_use]
    pub const fn approved_amount(&self) -> Amount {
        self.approved_amount
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the processing timestamp, if processed.
    #[must_use]
    pub const fn processed_at(&self) -> Option<Timestamp> {
        self.processed_at
    }

    /// Get the processor identity, if processed.
    #[must_use]
    pub const fn processed_by(&self) -> Option<&IdentityId> {
        self.processed_by.as_ref()
    }

    /// Get the note recorded at processing time (rejection reason).
    #[must_use]
    pub fn processing_note(&self) -> Option<&str> {
        self.processing_note.as_deref()
    }

    /// Mark the proposal approved, recording the approved amount and
    /// the processor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless pending; `InvalidAmount`
    /// if the approved amount is zero or exceeds the proposed amount.
    pub fn approve(
        &mut self,
        approved_amount: Amount,
        processor: IdentityId,
    ) -> Result<(), TreasuryError> {
        ProposalStateMachine::validate_transition(self.status, ProposalStatus::Approved)?;
        if approved_amount.is_zero() {
            return Err(TreasuryError::InvalidAmount {
                field: "approved_amount".to_string(),
                message: "approved amount must be positive".to_string(),
            });
        }
        if approved_amount > self.amount {
            return Err(TreasuryError::InvalidAmount {
                field: "approved_amount".to_string(),
                message: format!(
                    "approved amount {approved_amount} exceeds proposed amount {}",
                    self.amount
                ),
            });
        }

        self.status = ProposalStatus::Approved;
        self.approved_amount = approved_amount;
        self.processed_at = Some(Timestamp::now());
        self.processed_by = Some(processor);
        Ok(())
    }

    /// Mark the proposal rejected, recording the reason and processor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless pending.
    pub fn reject(
        &mut self,
        reason: impl Into<String>,
        processor: IdentityId,
    ) -> Result<(), TreasuryError> {
        ProposalStateMachine::validate_transition(self.status, ProposalStatus::Rejected)?;

        self.status = ProposalStatus::Rejected;
        self.processed_at = Some(Timestamp::now());
        self.processed_by = Some(processor);
        self.processing_note = Some(reason.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_command() -> SubmitProposalCommand {
        SubmitProposalCommand {
            proposer: IdentityId::new("analyst-1"),
            vehicle_id: VehicleId::new(1),
            amount: Amount::new(800),
            rationale: "rotate idle cash into the bond ladder".to_string(),
            expected_roi_bp: 450,
        }
    }

    fn make_proposal() -> InvestmentProposal {
        InvestmentProposal::new(ProposalId::new(1), make_command(), RiskScore::new(35).unwrap())
            .unwrap()
    }

    #[test]
    fn proposal_new_is_pending() {
        let proposal = make_proposal();
        assert_eq!(proposal.status(), ProposalStatus::Pending);
        assert_eq!(proposal.approved_amount(), Amount::ZERO);
        assert!(proposal.processed_at().is_none());
        assert!(proposal.processed_by().is_none());
        assert_eq!(proposal.risk_snapshot().value(), 35);
    }

    #[test]
    fn proposal_new_rejects_zero_amount() {
        let mut cmd = make_command();
        cmd.amount = Amount::ZERO;
        let err =
            InvestmentProposal::new(ProposalId::new(1), cmd, RiskScore::new(35).unwrap())
                .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAmount { .. }));
    }

    #[test]
    fn proposal_new_rejects_empty_rationale() {
        let mut cmd = make_command();
        cmd.rationale = String::new();
        assert!(
            InvestmentProposal::new(ProposalId::new(1), cmd, RiskScore::new(35).unwrap())
                .is_err()
        );
    }

    #[test]
    fn approve_records_amount_and_processor() {
        let mut proposal = make_proposal();
        proposal
            .approve(Amount::new(500), IdentityId::new("treasurer-1"))
            .unwrap();

        assert_eq!(proposal.status(), ProposalStatus::Approved);
        assert_eq!(proposal.approved_amount(), Amount::new(500));
        assert_eq!(proposal.processed_by().unwrap().as_str(), "treasurer-1");
        assert!(proposal.processed_at().is_some());
    }

    #[test]
    fn approve_rejects_amount_above_proposed() {
        let mut proposal = make_proposal();
        let err = proposal
            .approve(Amount::new(801), IdentityId::new("treasurer-1"))
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAmount { .. }));
        assert_eq!(proposal.status(), ProposalStatus::Pending);
        assert_eq!(proposal.approved_amount(), Amount::ZERO);
    }

    #[test]
    fn approve_rejects_zero_amount() {
        let mut proposal = make_proposal();
        let err = proposal
            .approve(Amount::ZERO, IdentityId::new("treasurer-1"))
            .unwrap_err();
        assert!(matches!(err, TreasuryError::InvalidAmount { .. }));
    }

    #[test]
    fn approve_twice_fails() {
        let mut proposal = make_proposal();
        proposal
            .approve(Amount::new(800), IdentityId::new("treasurer-1"))
            .unwrap();

        let err = proposal
            .approve(Amount::new(800), IdentityId::new("treasurer-2"))
            .unwrap_err();
        assert!(matches!(
            err,
            TreasuryError::InvalidStateTransition { .. }
        ));
        // First decision stands.
        assert_eq!(proposal.processed_by().unwrap().as_str(), "treasurer-1");
    }

    #[test]
    fn reject_records_reason() {
        let mut proposal = make_proposal();
        proposal
            .reject("over-concentrated", IdentityId::new("treasurer-1"))
            .unwrap();

        assert_eq!(proposal.status(), ProposalStatus::Rejected);
        assert_eq!(proposal.processing_note(), Some("over-concentrated"));
        assert_eq!(proposal.approved_amount(), Amount::ZERO);
    }

    #[test]
    fn reject_approved_proposal_fails() {
        let mut proposal = make_proposal();
        proposal
            .approve(Amount::new(800), IdentityId::new("treasurer-1"))
            .unwrap();

        let err = proposal
            .reject("too late", IdentityId::new("treasurer-2"))
            .unwrap_err();
        assert!(matches!(
            err,
            TreasuryError::InvalidStateTransition { .. }
        ));
    }

    #[test]
    fn proposal_serde_roundtrip() {
        let proposal = make_proposal();
        let json = serde_json::to_string(&proposal).unwrap();
        let parsed: InvestmentProposal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, proposal);
    }
}
