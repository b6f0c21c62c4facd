//! Proposal workflow value objects.

mod proposal_status;

pub use proposal_status::ProposalStatus;
