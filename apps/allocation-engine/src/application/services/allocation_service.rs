//! Allocation application service
//!
//! Authorization-gated facade over the treasury. Every mutating call
//! checks the caller's capability first, then runs the whole
//! read-validate-mutate sequence under one lock hold so validation and
//! commit see the same ledger state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::application::dto::{PortfolioSummaryDto, ProposalDto, VehicleDto};
use crate::application::ports::AuthorizationPort;
use crate::domain::shared::{
    Amount, BasisPoints, IdentityId, ProposalId, TreasuryError, VehicleId,
};
use crate::domain::proposal_workflow::SubmitProposalCommand;
use crate::domain::vehicle_registry::RegisterVehicleCommand;
use crate::domain::Treasury;

const ROLE_MANAGER: &str = "manager";
const ROLE_ADMINISTRATOR: &str = "administrator";

/// Application service driving all treasury mutations.
pub struct AllocationService<A: AuthorizationPort> {
    auth: Arc<A>,
    treasury: Mutex<Treasury>,
}

impl<A: AuthorizationPort> AllocationService<A> {
    /// Create the service around an initialized treasury.
    pub fn new(auth: Arc<A>, treasury: Treasury) -> Self {
        Self {
            auth,
            treasury: Mutex::new(treasury),
        }
    }

    /// Replace the single-exposure limit. Administrator-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` or `InvalidRiskParameters`.
    pub async fn initialize(
        &self,
        identity: &IdentityId,
        max_single_exposure: BasisPoints,
    ) -> Result<(), TreasuryError> {
        self.require_administrator(identity).await?;
        let mut treasury = self.treasury.lock().await;
        treasury.initialize(max_single_exposure)?;
        info!(identity = %identity, limit_bp = max_single_exposure.value(), "exposure limit configured");
        Ok(())
    }

    /// Register a new investment vehicle. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` or a command validation error.
    pub async fn register_vehicle(
        &self,
        identity: &IdentityId,
        cmd: RegisterVehicleCommand,
    ) -> Result<VehicleId, TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        let id = treasury.register_vehicle(cmd)?;
        info!(identity = %identity, vehicle_id = %id, "vehicle registered");
        Ok(id)
    }

    /// Record a performance observation on a vehicle. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized`, `NotFound` or `InvalidAmount`.
    pub async fn update_performance(
        &self,
        identity: &IdentityId,
        vehicle_id: VehicleId,
        rating: u8,
        actual_return_bp: i64,
    ) -> Result<(), TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        treasury.update_performance(vehicle_id, rating, actual_return_bp)?;
        info!(identity = %identity, vehicle_id = %vehicle_id, rating, "performance recorded");
        Ok(())
    }

    /// Submit an allocation proposal. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized`, `NotFound`, `InvalidAllocation` or
    /// `InvalidAmount`.
    pub async fn submit_proposal(
        &self,
        identity: &IdentityId,
        cmd: SubmitProposalCommand,
    ) -> Result<ProposalId, TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        let id = treasury.submit_proposal(cmd)?;
        info!(identity = %identity, proposal_id = %id, "proposal submitted");
        Ok(id)
    }

    /// Approve a pending proposal and apply its allocation.
    /// Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` or any approval validation error; state
    /// is unchanged on failure.
    pub async fn approve_proposal(
        &self,
        identity: &IdentityId,
        proposal_id: ProposalId,
        approved_amount: Amount,
    ) -> Result<Amount, TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        match treasury.approve_proposal(proposal_id, approved_amount, identity.clone()) {
            Ok(amount) => {
                info!(identity = %identity, proposal_id = %proposal_id, amount = %amount, "proposal approved");
                Ok(amount)
            }
            Err(err) => {
                warn!(identity = %identity, proposal_id = %proposal_id, error = %err, "approval refused");
                Err(err)
            }
        }
    }

    /// Reject a pending proposal. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized`, `NotFound` or `InvalidStateTransition`.
    pub async fn reject_proposal(
        &self,
        identity: &IdentityId,
        proposal_id: ProposalId,
        reason: impl Into<String> + Send,
    ) -> Result<(), TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        treasury.reject_proposal(proposal_id, reason, identity.clone())?;
        info!(identity = %identity, proposal_id = %proposal_id, "proposal rejected");
        Ok(())
    }

    /// Set a vehicle's allocation to an absolute value. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` or any rebalance validation error; state
    /// is unchanged on failure.
    pub async fn rebalance(
        &self,
        identity: &IdentityId,
        vehicle_id: VehicleId,
        new_allocation: Amount,
    ) -> Result<(), TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        match treasury.rebalance(vehicle_id, new_allocation) {
            Ok(()) => {
                info!(identity = %identity, vehicle_id = %vehicle_id, allocation = %new_allocation, "vehicle rebalanced");
                Ok(())
            }
            Err(err) => {
                warn!(identity = %identity, vehicle_id = %vehicle_id, error = %err, "rebalance refused");
                Err(err)
            }
        }
    }

    /// Suspend a vehicle. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized`, `NotFound` or `InvalidStateTransition`.
    pub async fn suspend_vehicle(
        &self,
        identity: &IdentityId,
        vehicle_id: VehicleId,
    ) -> Result<(), TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        treasury.suspend_vehicle(vehicle_id)?;
        info!(identity = %identity, vehicle_id = %vehicle_id, "vehicle suspended");
        Ok(())
    }

    /// Reactivate a suspended vehicle. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized`, `NotFound` or `InvalidStateTransition`.
    pub async fn reactivate_vehicle(
        &self,
        identity: &IdentityId,
        vehicle_id: VehicleId,
    ) -> Result<(), TreasuryError> {
        self.require_manager(identity).await?;
        let mut treasury = self.treasury.lock().await;
        treasury.reactivate_vehicle(vehicle_id)?;
        info!(identity = %identity, vehicle_id = %vehicle_id, "vehicle reactivated");
        Ok(())
    }

    /// Snapshot the portfolio ledger. Read-only, ungated.
    pub async fn summary(&self) -> PortfolioSummaryDto {
        let treasury = self.treasury.lock().await;
        PortfolioSummaryDto::from(treasury.summary())
    }

    /// Snapshot one vehicle. Read-only, ungated.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn vehicle(&self, id: VehicleId) -> Result<VehicleDto, TreasuryError> {
        let treasury = self.treasury.lock().await;
        treasury.vehicle(id).map(VehicleDto::from)
    }

    /// Snapshot one proposal. Read-only, ungated.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn proposal(&self, id: ProposalId) -> Result<ProposalDto, TreasuryError> {
        let treasury = self.treasury.lock().await;
        treasury.proposal(id).map(ProposalDto::from)
    }

    /// Snapshot all vehicles in id order. Read-only, ungated.
    pub async fn vehicles(&self) -> Vec<VehicleDto> {
        let treasury = self.treasury.lock().await;
        treasury.vehicles().map(VehicleDto::from).collect()
    }

    /// Snapshot all proposals in id order. Read-only, ungated.
    pub async fn proposals(&self) -> Vec<ProposalDto> {
        let treasury = self.treasury.lock().await;
        treasury.proposals().map(ProposalDto::from).collect()
    }

    async fn require_manager(&self, identity: &IdentityId) -> Result<(), TreasuryError> {
        if self.auth.is_manager(identity).await {
            Ok(())
        } else {
            warn!(identity = %identity, "manager capability denied");
            Err(TreasuryError::Unauthorized {
                identity: identity.to_string(),
                required: ROLE_MANAGER.to_string(),
            })
        }
    }

    async fn require_administrator(&self, identity: &IdentityId) -> Result<(), TreasuryError> {
        if self.auth.is_administrator(identity).await {
            Ok(())
        } else {
            warn!(identity = %identity, "administrator capability denied");
            Err(TreasuryError::Unauthorized {
                identity: identity.to_string(),
                required: ROLE_ADMINISTRATOR.to_string(),
            })
        }
    }
}
