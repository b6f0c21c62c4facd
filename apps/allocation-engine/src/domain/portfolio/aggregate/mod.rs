//! Portfolio aggregates.

mod ledger;

pub use ledger::{LedgerSummary, PortfolioLedger, MAX_SINGLE_EXPOSURE_CAP_BP};
