//! Campaign registry.
//!
//! This module owns the append-only collection of campaigns:
//! - Campaign records and their immutable creation parameters
//! - Sequential id assignment
//! - Creation precondition validation
//! - The derived per-campaign lifecycle phase
//! - Error types for registry operations

pub mod error;
pub mod registry;
pub mod types;

pub use error::CampaignError;
pub use registry::CampaignRegistry;
pub use types::{Campaign, CampaignPhase, CreateCampaignInput};
