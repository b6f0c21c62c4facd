//! Read-only projections for the reporting collaborator.

mod snapshot_dto;
mod summary_dto;

pub use snapshot_dto::{ProposalDto, VehicleDto};
pub use summary_dto::PortfolioSummaryDto;
