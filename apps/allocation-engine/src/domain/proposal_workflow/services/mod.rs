//! Proposal workflow domain services.

mod proposal_state_machine;

pub use proposal_state_machine::ProposalStateMachine;
