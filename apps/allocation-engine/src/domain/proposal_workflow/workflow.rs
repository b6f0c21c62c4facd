//! Proposal Workflow store
//!
//! Exclusive owner of proposal records. Ids are assigned sequentially
//! and never reused; processed proposals are retained as an audit
//! record.

use std::collections::BTreeMap;

use crate::domain::proposal_workflow::aggregate::{InvestmentProposal, SubmitProposalCommand};
use crate::domain::shared::{ProposalId, RiskScore, TreasuryError};

/// In-memory store of investment proposals.
#[derive(Debug, Default, Clone)]
pub struct ProposalWorkflow {
    proposals: BTreeMap<ProposalId, InvestmentProposal>,
    next_id: u64,
}

impl ProposalWorkflow {
    /// Create an empty workflow store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            proposals: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Submit a new proposal, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns error if the submission command is invalid. The id
    /// counter does not advance on failure.
    pub fn submit(
        &mut self,
        cmd: SubmitProposalCommand,
        risk_snapshot: RiskScore,
    ) -> Result<ProposalId, TreasuryError> {
        let id = ProposalId::new(self.next_id);
        let proposal = InvestmentProposal::new(id, cmd, risk_snapshot)?;
        self.next_id += 1;
        self.proposals.insert(id, proposal);
        Ok(id)
    }

    /// Look up a proposal by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub fn get(&self, id: ProposalId) -> Result<&InvestmentProposal, TreasuryError> {
        self.proposals
            .get(&id)
            .ok_or_else(|| TreasuryError::NotFound {
                entity: "proposal".to_string(),
                id: id.to_string(),
            })
    }

    /// Look up a proposal for mutation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub(crate) fn get_mut(
        &mut self,
        id: ProposalId,
    ) -> Result<&mut InvestmentProposal, TreasuryError> {
        self.proposals
            .get_mut(&id)
            .ok_or_else(|| TreasuryError::NotFound {
                entity: "proposal".to_string(),
                id: id.to_string(),
            })
    }

    /// Iterate over all proposals in id order.
    pub fn iter(&self) -> impl Iterator<Item = &InvestmentProposal> {
        self.proposals.values()
    }

    /// Iterate over proposals still awaiting a decision.
    pub fn pending(&self) -> impl Iterator<Item = &InvestmentProposal> {
        self.proposals.values().filter(|p| p.status().is_pending())
    }

    /// Number of stored proposals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Returns true if no proposal has been submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
