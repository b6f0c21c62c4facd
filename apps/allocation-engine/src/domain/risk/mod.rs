//! Risk bounded context: pure exposure and VaR arithmetic.
//!
//! No mutation lives here; the treasury update path calls into these
//! services before committing any allocation change.

pub mod services;

pub use services::{RiskEngine, MIN_DIVERSIFICATION_BP};
