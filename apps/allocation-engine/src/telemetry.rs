//! Tracing setup.
//!
//! Console subscriber with `RUST_LOG`-style filtering. The treasury
//! core has no exporter of its own; the hosting service owns any
//! telemetry pipeline beyond stdout.
//!
//! # Usage
//!
//! ```rust,ignore
//! use allocation_engine::telemetry::init_telemetry;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_telemetry();
//!     // ... application code
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// Filter defaults to `info` when `RUST_LOG` is unset. Safe to call
/// once per process; later calls are ignored.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
