//! Proposal workflow aggregates.

mod proposal;

pub use proposal::{InvestmentProposal, SubmitProposalCommand};
