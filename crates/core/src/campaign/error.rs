//! Campaign registry error types.

use chrono::{DateTime, Utc};
use crowdvault_shared::AppError;
use crowdvault_shared::types::CampaignId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during campaign registry operations.
#[derive(Debug, Error)]
pub enum CampaignError {
    /// Funding goal must be a positive amount.
    #[error("Funding goal must be positive, got {goal}")]
    InvalidGoal {
        /// The rejected goal amount.
        goal: Decimal,
    },

    /// Deadline must be strictly in the future at creation time.
    #[error("Deadline {deadline} is not after creation time {now}")]
    InvalidDeadline {
        /// The rejected deadline.
        deadline: DateTime<Utc>,
        /// The creation time the deadline was compared against.
        now: DateTime<Utc>,
    },

    /// Campaign not found.
    #[error("Campaign not found: {0}")]
    NotFound(CampaignId),
}

impl CampaignError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGoal { .. } => "INVALID_GOAL",
            Self::InvalidDeadline { .. } => "INVALID_DEADLINE",
            Self::NotFound(_) => "CAMPAIGN_NOT_FOUND",
        }
    }
}

impl From<CampaignError> for AppError {
    fn from(err: CampaignError) -> Self {
        match err {
            CampaignError::InvalidGoal { .. } | CampaignError::InvalidDeadline { .. } => {
                Self::Validation(err.to_string())
            }
            CampaignError::NotFound(id) => Self::NotFound(format!("campaign {id}")),
        }
    }
}
