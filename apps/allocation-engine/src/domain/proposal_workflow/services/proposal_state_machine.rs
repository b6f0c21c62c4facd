//! Proposal State Machine Service
//!
//! Validates state transitions for the approval lifecycle.

use crate::domain::proposal_workflow::value_objects::ProposalStatus;
use crate::domain::shared::TreasuryError;

/// Proposal state machine for validating transitions.
///
/// The lifecycle is `Pending -> {Approved, Rejected}`; both outcomes
/// are terminal.
pub struct ProposalStateMachine;

impl ProposalStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: ProposalStatus, to: ProposalStatus) -> bool {
        matches!(
            (from, to),
            (ProposalStatus::Pending, ProposalStatus::Approved)
                | (ProposalStatus::Pending, ProposalStatus::Rejected)
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the transition is invalid.
    pub fn validate_transition(
        from: ProposalStatus,
        to: ProposalStatus,
    ) -> Result<(), TreasuryError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(TreasuryError::InvalidStateTransition {
                from: from.to_string(),
                to: to.to_string(),
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: ProposalStatus, to: ProposalStatus) -> String {
        match from {
            ProposalStatus::Approved => {
                format!("proposal is already approved, cannot transition to {to}")
            }
            ProposalStatus::Rejected => {
                format!("proposal is already rejected, cannot transition to {to}")
            }
            ProposalStatus::Pending => format!("invalid transition from {from} to {to}"),
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: ProposalStatus) -> Vec<ProposalStatus> {
        match from {
            ProposalStatus::Pending => vec![ProposalStatus::Approved, ProposalStatus::Rejected],
            // Terminal states
            ProposalStatus::Approved | ProposalStatus::Rejected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions_from_pending() {
        assert!(ProposalStateMachine::is_valid_transition(
            ProposalStatus::Pending,
            ProposalStatus::Approved
        ));
        assert!(ProposalStateMachine::is_valid_transition(
            ProposalStatus::Pending,
            ProposalStatus::Rejected
        ));
    }

    #[test]
    fn no_transitions_from_terminal_states() {
        for terminal in [ProposalStatus::Approved, ProposalStatus::Rejected] {
            assert!(ProposalStateMachine::valid_next_states(terminal).is_empty());
            assert!(!ProposalStateMachine::is_valid_transition(
                terminal,
                ProposalStatus::Approved
            ));
            assert!(!ProposalStateMachine::is_valid_transition(
                terminal,
                ProposalStatus::Rejected
            ));
        }
    }

    #[test]
    fn self_transition_is_invalid() {
        assert!(!ProposalStateMachine::is_valid_transition(
            ProposalStatus::Pending,
            ProposalStatus::Pending
        ));
    }

    #[test]
    fn validate_transition_returns_error_for_invalid() {
        let result = ProposalStateMachine::validate_transition(
            ProposalStatus::Approved,
            ProposalStatus::Rejected,
        );
        assert!(matches!(
            result,
            Err(TreasuryError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn validate_transition_returns_ok_for_valid() {
        assert!(ProposalStateMachine::validate_transition(
            ProposalStatus::Pending,
            ProposalStatus::Approved
        )
        .is_ok());
    }

    #[test]
    fn transition_error_reason_terminal_states() {
        let reason = ProposalStateMachine::transition_error_reason(
            ProposalStatus::Approved,
            ProposalStatus::Rejected,
        );
        assert!(reason.contains("already approved"));

        let reason = ProposalStateMachine::transition_error_reason(
            ProposalStatus::Rejected,
            ProposalStatus::Approved,
        );
        assert!(reason.contains("already rejected"));
    }

    #[test]
    fn valid_next_states_from_pending() {
        let states = ProposalStateMachine::valid_next_states(ProposalStatus::Pending);
        assert_eq!(states.len(), 2);
        assert!(states.contains(&ProposalStatus::Approved));
        assert!(states.contains(&ProposalStatus::Rejected));
    }
}
