//! Proposal Workflow bounded context.
//!
//! Owns the proposal approval lifecycle. Approval is the only path
//! that raises a vehicle's allocation; the treasury update path drives
//! the ledger commit once a transition is validated here.

pub mod aggregate;
pub mod services;
pub mod value_objects;
pub mod workflow;

pub use aggregate::{InvestmentProposal, SubmitProposalCommand};
pub use services::ProposalStateMachine;
pub use value_objects::ProposalStatus;
pub use workflow::ProposalWorkflow;
