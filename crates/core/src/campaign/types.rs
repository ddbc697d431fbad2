//! Campaign data types and the derived lifecycle phase.

use chrono::{DateTime, Utc};
use crowdvault_shared::types::{CampaignId, PartyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for creating a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaignInput {
    /// Recipient of the pledged funds if the campaign succeeds.
    pub owner: PartyId,
    /// Display title. Opaque to the ledger - never validated or parsed.
    pub title: String,
    /// Minimum aggregate pledged amount required for collection.
    pub goal: Decimal,
    /// Absolute time after which pledging stops and settlement opens.
    pub deadline: DateTime<Utc>,
}

/// A campaign record.
///
/// Creation parameters (`owner`, `title`, `goal`, `deadline`) are immutable
/// after creation; `pledged_total` and `collected` are the only mutable
/// fields, and only the pledge ledger mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign id, sequential in creation order.
    pub id: CampaignId,
    /// Recipient of the pledged funds if the campaign succeeds.
    pub owner: PartyId,
    /// Display title.
    pub title: String,
    /// Funding goal. Always positive.
    pub goal: Decimal,
    /// Pledging deadline. Always after `created_at`.
    pub deadline: DateTime<Utc>,
    /// Running sum of all current, non-withdrawn pledges.
    pub pledged_total: Decimal,
    /// Whether the goal funds have already been paid out to the owner.
    pub collected: bool,
    /// Creation timestamp, as supplied by the caller's time oracle.
    pub created_at: DateTime<Utc>,
}

/// Derived lifecycle phase of a campaign.
///
/// Never stored: computed lazily on each call from the supplied current
/// time, the pledged total, the goal, and the `collected` flag. No
/// transition is reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPhase {
    /// Before the deadline. Pledges and withdrawals allowed.
    Open,
    /// Past the deadline with the goal missed. Refunds allowed, collection
    /// and pledging forbidden.
    FailedUnsettled,
    /// Past the deadline with the goal met, payout pending. Collection
    /// allowed (owner only), refunds and pledging forbidden.
    SuccessfulUnsettled,
    /// Paid out. No further operation succeeds.
    Settled,
}

impl Campaign {
    /// Returns true while the campaign accepts pledges.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.deadline
    }

    /// Returns true once the pledged total has reached the goal.
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.pledged_total >= self.goal
    }

    /// Whether a pledger may take funds back out at this moment.
    ///
    /// Refunds are allowed before the deadline (early exit, regardless of
    /// the eventual outcome) and after the deadline when the goal was
    /// missed. Once the deadline passes with the goal met, the funds are
    /// earmarked for the owner payout and refund is forbidden - this gate
    /// and the collection preconditions are complementary by design. A
    /// settled campaign never refunds, whatever time the oracle reports.
    #[must_use]
    pub fn can_refund(&self, now: DateTime<Utc>) -> bool {
        !self.collected && (self.is_open(now) || !self.goal_reached())
    }

    /// Computes the current lifecycle phase.
    #[must_use]
    pub fn phase(&self, now: DateTime<Utc>) -> CampaignPhase {
        if self.collected {
            CampaignPhase::Settled
        } else if self.is_open(now) {
            CampaignPhase::Open
        } else if self.goal_reached() {
            CampaignPhase::SuccessfulUnsettled
        } else {
            CampaignPhase::FailedUnsettled
        }
    }
}
