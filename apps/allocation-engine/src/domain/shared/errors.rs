//! Error taxonomy for the allocation engine.
//!
//! Every operation returns a typed result; failures never leave partial
//! state behind (validate-then-commit, never commit-then-rollback).

use thiserror::Error;

/// Errors surfaced by treasury operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    /// Caller lacks the required capability.
    #[error("identity '{identity}' lacks the {required} capability")]
    Unauthorized {
        /// The caller identity that was checked.
        identity: String,
        /// The capability the operation requires.
        required: String,
    },

    /// Zero, negative, or out-of-range numeric input.
    #[error("invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// Field name.
        field: String,
        /// Error details.
        message: String,
    },

    /// Risk score or allocation ceiling out of bounds.
    #[error("invalid risk parameters for '{field}': {message}")]
    InvalidRiskParameters {
        /// Field name.
        field: String,
        /// Error details.
        message: String,
    },

    /// Referenced vehicle or proposal id is absent.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type (e.g. "vehicle", "proposal").
        entity: String,
        /// Entity identifier.
        id: String,
    },

    /// Proposal is not in the state the transition requires.
    #[error("invalid state transition: {from} -> {to}: {reason}")]
    InvalidStateTransition {
        /// Current state.
        from: String,
        /// Attempted state.
        to: String,
        /// Reason for failure.
        reason: String,
    },

    /// Allocation ceiling or exposure-ratio violation.
    #[error("exposure limit exceeded [{constraint}]: observed {observed}, limit {limit}")]
    ExposureLimitExceeded {
        /// Constraint code (e.g. `ALLOCATION_CEILING`).
        constraint: String,
        /// Configured limit, in the constraint's unit.
        limit: u64,
        /// Observed value, in the constraint's unit.
        observed: u64,
    },

    /// Vehicle not active, or an allocation rule is inapplicable.
    #[error("invalid allocation: {message}")]
    InvalidAllocation {
        /// Error details.
        message: String,
    },
}

/// Constraint code for a per-vehicle allocation ceiling violation.
pub const CONSTRAINT_ALLOCATION_CEILING: &str = "ALLOCATION_CEILING";

/// Constraint code for a single-exposure ratio violation.
pub const CONSTRAINT_SINGLE_EXPOSURE_RATIO: &str = "SINGLE_EXPOSURE_RATIO";
