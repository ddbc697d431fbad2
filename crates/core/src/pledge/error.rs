//! Pledge ledger error types.
//!
//! Every variant maps onto one of the four failure classes: validation,
//! authorization, timing, or not-found. A failed operation never mutates
//! ledger state.

use chrono::{DateTime, Utc};
use crowdvault_shared::AppError;
use crowdvault_shared::types::CampaignId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during pledge ledger operations.
#[derive(Debug, Error)]
pub enum PledgeError {
    // ========== Validation Errors ==========
    /// Amount cannot be zero.
    #[error("Amount cannot be zero")]
    ZeroAmount,

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    // ========== Not-Found Errors ==========
    /// Campaign not found.
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    /// The pledger has no active pledge on this campaign.
    #[error("No active pledge on campaign {0}")]
    NoPledge(CampaignId),

    // ========== Timing Errors ==========
    /// Pledging window has closed.
    #[error("Deadline {deadline} has passed (now {now})")]
    DeadlinePassed {
        /// The campaign deadline.
        deadline: DateTime<Utc>,
        /// The current time supplied by the caller.
        now: DateTime<Utc>,
    },

    /// Refund is forbidden: the deadline has passed with the goal reached,
    /// so the funds are earmarked for the owner payout.
    #[error("Refund not allowed: campaign succeeded, funds are earmarked for the owner")]
    RefundNotAllowed,

    /// Collection attempted before the deadline.
    #[error("Deadline {deadline} not reached yet (now {now})")]
    DeadlineNotReached {
        /// The campaign deadline.
        deadline: DateTime<Utc>,
        /// The current time supplied by the caller.
        now: DateTime<Utc>,
    },

    /// Collection attempted on a campaign that missed its goal.
    #[error("Goal not reached: pledged {pledged} of {goal}")]
    GoalNotReached {
        /// Current pledged total.
        pledged: Decimal,
        /// The funding goal.
        goal: Decimal,
    },

    /// Collection attempted on an already settled campaign.
    #[error("Campaign {0} has already been collected")]
    AlreadyCollected(CampaignId),

    // ========== Authorization Errors ==========
    /// Only the campaign owner may collect.
    #[error("Only the campaign owner may collect pledges")]
    NotOwner,

    // ========== Balance Errors ==========
    /// Requested withdrawal exceeds the pledger's current pledge.
    #[error("Insufficient pledge: requested {requested}, available {available}")]
    InsufficientPledge {
        /// Amount the pledger asked to withdraw.
        requested: Decimal,
        /// The pledger's current pledge.
        available: Decimal,
    },
}

impl PledgeError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::CampaignNotFound(_) => "CAMPAIGN_NOT_FOUND",
            Self::NoPledge(_) => "NO_PLEDGE",
            Self::DeadlinePassed { .. } => "DEADLINE_PASSED",
            Self::RefundNotAllowed => "REFUND_NOT_ALLOWED",
            Self::DeadlineNotReached { .. } => "DEADLINE_NOT_REACHED",
            Self::GoalNotReached { .. } => "GOAL_NOT_REACHED",
            Self::AlreadyCollected(_) => "ALREADY_COLLECTED",
            Self::NotOwner => "NOT_OWNER",
            Self::InsufficientPledge { .. } => "INSUFFICIENT_PLEDGE",
        }
    }
}

impl From<PledgeError> for AppError {
    fn from(err: PledgeError) -> Self {
        match err {
            PledgeError::ZeroAmount
            | PledgeError::NegativeAmount
            | PledgeError::InsufficientPledge { .. } => Self::Validation(err.to_string()),
            PledgeError::CampaignNotFound(_) | PledgeError::NoPledge(_) => {
                Self::NotFound(err.to_string())
            }
            PledgeError::DeadlinePassed { .. }
            | PledgeError::RefundNotAllowed
            | PledgeError::DeadlineNotReached { .. }
            | PledgeError::GoalNotReached { .. } => Self::Timing(err.to_string()),
            PledgeError::AlreadyCollected(_) => Self::Conflict(err.to_string()),
            PledgeError::NotOwner => Self::Forbidden(err.to_string()),
        }
    }
}
