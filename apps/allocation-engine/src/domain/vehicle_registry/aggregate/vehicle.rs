//! Investment Vehicle Aggregate Root
//!
//! A vehicle holds one slice of treasury capital. Its invariant is that
//! `current_allocation <= allocation_ceiling` at every observable point.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{
    Amount, Rating, RiskScore, Timestamp, TreasuryError, VehicleId,
    CONSTRAINT_ALLOCATION_CEILING,
};
use crate::domain::vehicle_registry::value_objects::VehicleStatus;

/// Command to register a new investment vehicle.
#[derive(Debug, Clone)]
pub struct RegisterVehicleCommand {
    /// Human-readable vehicle name.
    pub name: String,
    /// Category tag (e.g. "money-market", "bond-ladder").
    pub category: String,
    /// Risk score, 0-100.
    pub risk_score: u8,
    /// Expected return rate in basis points (may be negative).
    pub expected_return_bp: i64,
    /// Liquidity rating, 0-100.
    pub liquidity_rating: u8,
    /// Maximum capital this vehicle may hold.
    pub allocation_ceiling: Amount,
}

impl RegisterVehicleCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRiskParameters` for an out-of-range risk score,
    /// a zero ceiling, or an empty name; `InvalidAmount` for an
    /// out-of-range liquidity rating.
    pub fn validate(&self) -> Result<(), TreasuryError> {
        if self.name.trim().is_empty() {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "name".to_string(),
                message: "vehicle name must not be empty".to_string(),
            });
        }
        RiskScore::new(self.risk_score)?;
        Rating::new(self.liquidity_rating)?;
        if self.allocation_ceiling.is_zero() {
            return Err(TreasuryError::InvalidRiskParameters {
                field: "allocation_ceiling".to_string(),
                message: "allocation ceiling must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Investment Vehicle Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentVehicle {
    id: VehicleId,
    name: String,
    category: String,
    risk_score: RiskScore,
    expected_return_bp: i64,
    liquidity_rating: Rating,
    current_allocation: Amount,
    allocation_ceiling: Amount,
    performance_rating: Rating,
    actual_return_bp: i64,
    status: VehicleStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InvestmentVehicle {
    /// Create a new vehicle from a validated registration command.
    ///
    /// Initial allocation is zero and the vehicle starts active.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(id: VehicleId, cmd: RegisterVehicleCommand) -> Result<Self, TreasuryError> {
        cmd.validate()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: cmd.name,
            category: cmd.category,
            risk_score: RiskScore::new(cmd.risk_score)?,
            expected_return_bp: cmd.expected_return_bp,
            liquidity_rating: Rating::new(cmd.liquidity_rating)?,
            current_allocation: Amount::ZERO,
            allocation_ceiling: cmd.allocation_ceiling,
            performance_rating: Rating::default(),
            actual_return_bp: 0,
            status: VehicleStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get the vehicle id.
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Get the vehicle name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the category tag.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the risk score.
    #[must_use]
    pub const fn risk_score(&self) -> RiskScore {
        self.risk_score
    }

    /// Get the expected return rate in basis points.
    #[must_use]
    pub const fn expected_return_bp(&self) -> i64 {
        self.expected_return_bp
    }

    /// Get the liquidity rating.
    #[must_use]
    pub const fn liquidity_rating(&self) -> Rating {
        self.liquidity_rating
    }

    /// Get the current allocation.
    #[must_use]
    pub const fn current_allocation(&self) -> Amount {
        self.current_allocation
    }

    /// Get the allocation ceiling.
    #[must_use]
    pub const fn allocation_ceiling(&self) -> Amount {
        self.allocation_ceiling
    }

    /// Get the latest performance rating.
    #[must_use]
    pub const fn performance_rating(&self) -> Rating {
        self.performance_rating
    }

    /// Get the latest recorded actual return in basis points.
    #[must_use]
    pub const fn actual_return_bp(&self) -> i64 {
        self.actual_return_bp
    }

    /// Get the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Returns true if the vehicle accepts new proposals.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Record a performance observation.
    pub fn record_performance(&mut self, rating: Rating, actual_return_bp: i64) {
        self.performance_rating = rating;
        self.actual_return_bp = actual_return_bp;
        self.updated_at = Timestamp::now();
    }

    /// Set the allocation to a new absolute value.
    ///
    /// # Errors
    ///
    /// Returns `ExposureLimitExceeded` if the new allocation would
    /// exceed the vehicle's ceiling. The allocation is unchanged on
    /// failure.
    pub fn set_allocation(&mut self, new_allocation: Amount) -> Result<(), TreasuryError> {
        if new_allocation > self.allocation_ceiling {
            return Err(TreasuryError::ExposureLimitExceeded {
                constraint: CONSTRAINT_ALLOCATION_CEILING.to_string(),
                limit: self.allocation_ceiling.units(),
                observed: new_allocation.units(),
            });
        }
        self.current_allocation = new_allocation;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Suspend the vehicle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if already suspended.
    pub fn suspend(&mut self) -> Result<(), TreasuryError> {
        if !self.status.is_active() {
            return Err(TreasuryError::InvalidStateTransition {
                from: self.status.to_string(),
                to: VehicleStatus::Suspended.to_string(),
                reason: "vehicle is already suspended".to_string(),
            });
        }
        self.status = VehicleStatus::Suspended;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Reactivate a suspended vehicle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the vehicle is active.
    pub fn reactivate(&mut self) -> Result<(), TreasuryError> {
        if self.status.is_active() {
            return Err(TreasuryError::InvalidStateTransition {
                from: self.status.to_string(),
                to: VehicleStatus::Active.to_string(),
                reason: "vehicle is already active".to_string(),
            });
        }
        self.status = VehicleStatus::Active;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
