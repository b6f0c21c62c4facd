//! Vehicle and proposal snapshots for the reporting surface.

use serde::{Deserialize, Serialize};

use crate::domain::proposal_workflow::{InvestmentProposal, ProposalStatus};
use crate::domain::vehicle_registry::{InvestmentVehicle, VehicleStatus};

/// Read-only snapshot of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDto {
    /// Vehicle id.
    pub id: u64,
    /// Vehicle name.
    pub name: String,
    /// Category tag.
    pub category: String,
    /// Risk score, 0-100.
    pub risk_score: u8,
    /// Expected return rate in basis points.
    pub expected_return_bp: i64,
    /// Liquidity rating, 0-100.
    pub liquidity_rating: u8,
    /// Current allocation in currency units.
    pub current_allocation: u64,
    /// Allocation ceiling in currency units.
    pub allocation_ceiling: u64,
    /// Latest performance rating, 0-100.
    pub performance_rating: u8,
    /// Latest recorded actual return in basis points.
    pub actual_return_bp: i64,
    /// Lifecycle status.
    pub status: VehicleStatus,
}

impl From<&InvestmentVehicle> for VehicleDto {
    fn from(vehicle: &InvestmentVehicle) -> Self {
        Self {
            id: vehicle.id().value(),
            name: vehicle.name().to_string(),
            category: vehicle.category().to_string(),
            risk_score: vehicle.risk_score().value(),
            expected_return_bp: vehicle.expected_return_bp(),
            liquidity_rating: vehicle.liquidity_rating().value(),
            current_allocation: vehicle.current_allocation().units(),
            allocation_ceiling: vehicle.allocation_ceiling().units(),
            performance_rating: vehicle.performance_rating().value(),
            actual_return_bp: vehicle.actual_return_bp(),
            status: vehicle.status(),
        }
    }
}

/// Read-only snapshot of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDto {
    /// Proposal id.
    pub id: u64,
    /// Proposer identity.
    pub proposer: String,
    /// Referenced vehicle id.
    pub vehicle_id: u64,
    /// Proposed amount in currency units.
    pub amount: u64,
    /// Rationale text.
    pub rationale: String,
    /// Risk score snapshot taken at submission.
    pub risk_snapshot: u8,
    /// Expected ROI in basis points.
    pub expected_roi_bp: i64,
    /// Lifecycle status.
    pub status: ProposalStatus,
    /// Approved amount (zero until approved).
    pub approved_amount: u64,
    /// Processor identity, absent until processed.
    pub processed_by: Option<String>,
    /// Note recorded at processing time.
    pub processing_note: Option<String>,
}

impl From<&InvestmentProposal> for ProposalDto {
    fn from(proposal: &InvestmentProposal) -> Self {
        Self {
            id: proposal.id().value(),
            proposer: proposal.proposer().to_string(),
            vehicle_id: proposal.vehicle_id().value(),
            amount: proposal.amount().units(),
            rationale: proposal.rationale().to_string(),
            risk_snapshot: proposal.risk_snapshot().value(),
            expected_roi_bp: proposal.expected_roi_bp(),
            status: proposal.status(),
            approved_amount: proposal.approved_amount().units(),
            processed_by: proposal.processed_by().map(ToString::to_string),
            processing_note: proposal.processing_note().map(ToString::to_string),
        }
    }
}
