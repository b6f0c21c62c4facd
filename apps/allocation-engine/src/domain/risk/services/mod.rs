//! Risk domain services.

mod risk_engine;

pub use risk_engine::{RiskEngine, MIN_DIVERSIFICATION_BP};
