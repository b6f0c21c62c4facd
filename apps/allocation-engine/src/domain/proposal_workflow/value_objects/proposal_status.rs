//! Proposal status in the approval lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an investment proposal.
///
/// `Approved` and `Rejected` are terminal; a processed proposal is
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    /// Submitted, awaiting a manager decision.
    Pending,
    /// Approved; the allocation has been applied.
    Approved,
    /// Rejected; no allocation change occurred.
    Rejected,
}

impl ProposalStatus {
    /// Returns true if the proposal is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Returns true if the proposal still awaits a decision.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}
