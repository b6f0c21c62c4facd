// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Allocation Engine - Treasury Core Library
//!
//! Deterministic allocation/exposure ledger and proposal workflow
//! engine for the treasury system.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects,
//!   domain services)
//!   - `shared`: `Amount`, `BasisPoints`, ids, the error taxonomy
//!   - `vehicle_registry`: `InvestmentVehicle` aggregate and lifecycle
//!   - `risk`: pure exposure ratio / VaR / diversification arithmetic
//!   - `proposal_workflow`: `InvestmentProposal` aggregate and its
//!     approval state machine
//!   - `portfolio`: `PortfolioLedger` running totals
//!   - `treasury`: the single validate-then-commit mutation surface
//!
//! - **Application**: Orchestration around the domain
//!   - `ports`: `AuthorizationPort` capability checks
//!   - `services`: `AllocationService`, the authorization-gated facade
//!   - `dto`: read-only projections for the reporting collaborator
//!
//! Persistence and transport are external collaborators; this core is
//! in-memory and synchronous per operation, serialized by the service
//! layer's critical section.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use application::{AllocationService, AuthorizationPort, StaticRoleGate};
pub use config::{load_config, ConfigError, TreasuryConfig};
pub use domain::Treasury;
