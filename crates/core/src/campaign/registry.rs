//! Append-only campaign registry.

use chrono::{DateTime, Utc};
use crowdvault_shared::types::CampaignId;
use rust_decimal::Decimal;

use super::error::CampaignError;
use super::types::{Campaign, CreateCampaignInput};

/// Append-only collection of campaigns.
///
/// The registry is the single writer path for campaign creation: ids are
/// assigned sequentially from 0 in creation order and never reused, and
/// campaigns are never deleted. Mutable access to a record is restricted to
/// this crate so that only the pledge ledger can touch `pledged_total` and
/// `collected`.
#[derive(Debug, Default, Clone)]
pub struct CampaignRegistry {
    campaigns: Vec<Campaign>,
}

impl CampaignRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new campaign, returning its assigned id.
    ///
    /// The new campaign starts with `pledged_total = 0` and
    /// `collected = false`.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::InvalidGoal` if the goal is not positive, or
    /// `CampaignError::InvalidDeadline` if the deadline is not strictly
    /// after `now`. Nothing is appended on failure: the id counter is
    /// unchanged.
    pub fn create(
        &mut self,
        input: CreateCampaignInput,
        now: DateTime<Utc>,
    ) -> Result<CampaignId, CampaignError> {
        if input.goal <= Decimal::ZERO {
            return Err(CampaignError::InvalidGoal { goal: input.goal });
        }
        if input.deadline <= now {
            return Err(CampaignError::InvalidDeadline {
                deadline: input.deadline,
                now,
            });
        }

        let id = CampaignId::from_index(self.campaigns.len() as u64);
        self.campaigns.push(Campaign {
            id,
            owner: input.owner,
            title: input.title,
            goal: input.goal,
            deadline: input.deadline,
            pledged_total: Decimal::ZERO,
            collected: false,
            created_at: now,
        });

        Ok(id)
    }

    /// Read-only snapshot of a campaign.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::NotFound` if the id was never assigned.
    pub fn view(&self, id: CampaignId) -> Result<&Campaign, CampaignError> {
        self.campaigns
            .get(usize::try_from(id.into_inner()).map_err(|_| CampaignError::NotFound(id))?)
            .ok_or(CampaignError::NotFound(id))
    }

    /// Mutable access for the pledge ledger.
    pub(crate) fn get_mut(&mut self, id: CampaignId) -> Result<&mut Campaign, CampaignError> {
        self.campaigns
            .get_mut(usize::try_from(id.into_inner()).map_err(|_| CampaignError::NotFound(id))?)
            .ok_or(CampaignError::NotFound(id))
    }

    /// Number of campaigns ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Returns true if no campaign has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Iterates over all campaigns in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Campaign> {
        self.campaigns.iter()
    }
}
