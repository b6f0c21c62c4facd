//! Portfolio bounded context.
//!
//! Running portfolio totals and risk posture. Every mutation is an
//! incremental delta applied by the treasury update path after the
//! risk checks pass.

pub mod aggregate;

pub use aggregate::{LedgerSummary, PortfolioLedger, MAX_SINGLE_EXPOSURE_CAP_BP};
