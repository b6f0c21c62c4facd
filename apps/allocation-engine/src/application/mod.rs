//! Application layer: authorization-gated services, outbound ports and
//! reporting projections over the domain.

pub mod dto;
pub mod ports;
pub mod services;

pub use dto::{PortfolioSummaryDto, ProposalDto, VehicleDto};
pub use ports::{AuthorizationPort, StaticRoleGate};
pub use services::AllocationService;
