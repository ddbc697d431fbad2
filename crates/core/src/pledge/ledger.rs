//! Escrow ledger over the campaign registry.
//!
//! The ledger is the single serialization point for every state-mutating
//! operation: all mutations take `&mut self`, so the borrow checker
//! guarantees that no operation observes a partially-applied effect of
//! another. Each operation either completes fully or fails with all state
//! unchanged.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use crowdvault_shared::types::{CampaignId, PartyId};
use rust_decimal::Decimal;

use crate::campaign::{Campaign, CampaignError, CampaignRegistry, CreateCampaignInput};
use crate::event::LedgerEvent;

use super::error::PledgeError;
use super::types::Payout;

/// Escrow ledger for crowdfunding campaigns.
///
/// Owns the campaign registry and the per-(campaign, pledger) pledge
/// balances, and maintains the conservation invariant: a campaign's
/// `pledged_total` always equals the sum of its individual pledges.
///
/// External fund movement is never performed here. Operations that release
/// escrowed funds return a [`Payout`] which the caller settles strictly
/// after the call returns, so bookkeeping is always complete before any
/// transfer is initiated.
#[derive(Debug, Clone)]
pub struct EscrowLedger {
    /// Identity that instantiated the ledger. Recorded for administrative
    /// surfaces; confers no rights over campaign funds.
    operator: PartyId,
    registry: CampaignRegistry,
    pledges: HashMap<(CampaignId, PartyId), Decimal>,
    events: Vec<LedgerEvent>,
}

impl EscrowLedger {
    /// Creates an empty ledger owned by `operator`.
    #[must_use]
    pub fn new(operator: PartyId) -> Self {
        Self {
            operator,
            registry: CampaignRegistry::new(),
            pledges: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// The identity that instantiated the ledger.
    #[must_use]
    pub const fn operator(&self) -> PartyId {
        self.operator
    }

    /// Read-only access to the campaign registry.
    #[must_use]
    pub const fn registry(&self) -> &CampaignRegistry {
        &self.registry
    }

    /// Read-only snapshot of a campaign.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::NotFound` for unassigned ids.
    pub fn campaign(&self, id: CampaignId) -> Result<&Campaign, CampaignError> {
        self.registry.view(id)
    }

    /// The amount `pledger` currently has at stake in `id`.
    ///
    /// Zero means no active pledge; an absent record and an explicitly
    /// zeroed one are indistinguishable.
    #[must_use]
    pub fn pledge_of(&self, id: CampaignId, pledger: PartyId) -> Decimal {
        self.pledges
            .get(&(id, pledger))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drains the event log, handing the records to an external observer.
    #[must_use]
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Registers a new campaign.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::InvalidGoal` or
    /// `CampaignError::InvalidDeadline` on bad creation parameters; nothing
    /// is recorded on failure.
    pub fn create_campaign(
        &mut self,
        input: CreateCampaignInput,
        now: DateTime<Utc>,
    ) -> Result<CampaignId, CampaignError> {
        let owner = input.owner;
        let title = input.title.clone();
        let goal = input.goal;
        let deadline = input.deadline;

        let id = self.registry.create(input, now)?;

        self.events.push(LedgerEvent::CampaignCreated {
            id,
            owner,
            title,
            goal,
            deadline,
        });
        tracing::info!(campaign = %id, owner = %owner, goal = %goal, "campaign created");

        Ok(id)
    }

    /// Moves `amount` from the pledger's external balance into campaign
    /// escrow.
    ///
    /// # Errors
    ///
    /// Returns `ZeroAmount` / `NegativeAmount` for a non-positive amount,
    /// `CampaignNotFound` for an unassigned id, and `DeadlinePassed` once
    /// the campaign has closed.
    pub fn pledge(
        &mut self,
        id: CampaignId,
        pledger: PartyId,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), PledgeError> {
        validate_amount(amount)?;

        let campaign = self
            .registry
            .get_mut(id)
            .map_err(|_| PledgeError::CampaignNotFound(id))?;
        if !campaign.is_open(now) {
            return Err(PledgeError::DeadlinePassed {
                deadline: campaign.deadline,
                now,
            });
        }

        campaign.pledged_total += amount;
        *self
            .pledges
            .entry((id, pledger))
            .or_insert(Decimal::ZERO) += amount;

        self.events.push(LedgerEvent::Pledged { pledger, id, amount });
        tracing::info!(campaign = %id, pledger = %pledger, amount = %amount, "pledge recorded");

        Ok(())
    }

    /// Returns escrowed funds to a pledger.
    ///
    /// `amount: None` withdraws the pledger's entire current pledge;
    /// `Some(amount)` withdraws a part of it. Allowed before the deadline
    /// (early exit) or after it when the goal was missed; forbidden once
    /// success is locked in.
    ///
    /// The returned [`Payout`] must be settled externally after this call -
    /// the pledge balance and `pledged_total` are already reduced when it
    /// is handed out.
    ///
    /// # Errors
    ///
    /// Returns `CampaignNotFound`, `RefundNotAllowed` when the gate fails,
    /// `NoPledge` without a positive recorded pledge, `ZeroAmount` /
    /// `NegativeAmount` for a non-positive explicit amount, and
    /// `InsufficientPledge` when the explicit amount exceeds the pledge.
    pub fn withdraw_pledge(
        &mut self,
        id: CampaignId,
        pledger: PartyId,
        amount: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> Result<Payout, PledgeError> {
        let campaign = self
            .registry
            .get_mut(id)
            .map_err(|_| PledgeError::CampaignNotFound(id))?;
        if !campaign.can_refund(now) {
            return Err(PledgeError::RefundNotAllowed);
        }

        let held = self
            .pledges
            .get(&(id, pledger))
            .copied()
            .unwrap_or(Decimal::ZERO);
        if held <= Decimal::ZERO {
            return Err(PledgeError::NoPledge(id));
        }

        let amount = match amount {
            None => held,
            Some(requested) => {
                validate_amount(requested)?;
                if requested > held {
                    return Err(PledgeError::InsufficientPledge {
                        requested,
                        available: held,
                    });
                }
                requested
            }
        };

        campaign.pledged_total -= amount;
        let remaining = held - amount;
        if remaining.is_zero() {
            self.pledges.remove(&(id, pledger));
        } else {
            self.pledges.insert((id, pledger), remaining);
        }

        self.events
            .push(LedgerEvent::PledgeWithdrawn { pledger, id, amount });
        tracing::info!(campaign = %id, pledger = %pledger, amount = %amount, "pledge withdrawn");

        Ok(Payout {
            to: pledger,
            amount,
        })
    }

    /// Pays the aggregate pledged total out to the campaign owner.
    ///
    /// Succeeds at most once per campaign: the `collected` flag guards
    /// against double payout. Individual pledge records are deliberately
    /// not zeroed - refund eligibility and collection eligibility are
    /// mutually exclusive, so no refund can observe them afterwards.
    ///
    /// The returned [`Payout`] must be settled externally after this call.
    ///
    /// # Errors
    ///
    /// Returns `CampaignNotFound`, `NotOwner` for any caller other than the
    /// owner (regardless of timing or goal state), `AlreadyCollected` on a
    /// repeat call, `DeadlineNotReached` before the deadline, and
    /// `GoalNotReached` when the goal was missed.
    pub fn collect_pledges(
        &mut self,
        id: CampaignId,
        caller: PartyId,
        now: DateTime<Utc>,
    ) -> Result<Payout, PledgeError> {
        let campaign = self
            .registry
            .get_mut(id)
            .map_err(|_| PledgeError::CampaignNotFound(id))?;
        if caller != campaign.owner {
            return Err(PledgeError::NotOwner);
        }
        if campaign.collected {
            return Err(PledgeError::AlreadyCollected(id));
        }
        if campaign.is_open(now) {
            return Err(PledgeError::DeadlineNotReached {
                deadline: campaign.deadline,
                now,
            });
        }
        if !campaign.goal_reached() {
            return Err(PledgeError::GoalNotReached {
                pledged: campaign.pledged_total,
                goal: campaign.goal,
            });
        }

        campaign.collected = true;
        let owner = campaign.owner;
        let amount = campaign.pledged_total;

        self.events
            .push(LedgerEvent::CollectedPledges { owner, id, amount });
        tracing::info!(campaign = %id, owner = %owner, amount = %amount, "pledges collected");

        Ok(Payout { to: owner, amount })
    }

    /// Sum of all individual pledges recorded against a campaign.
    ///
    /// Always equals the campaign's `pledged_total`; exposed for integrity
    /// checks and tests.
    #[must_use]
    pub fn pledged_sum(&self, id: CampaignId) -> Decimal {
        self.pledges
            .iter()
            .filter(|((campaign, _), _)| *campaign == id)
            .map(|(_, amount)| *amount)
            .sum()
    }
}

/// Rejects non-positive amounts.
fn validate_amount(amount: Decimal) -> Result<(), PledgeError> {
    if amount.is_zero() {
        return Err(PledgeError::ZeroAmount);
    }
    if amount < Decimal::ZERO {
        return Err(PledgeError::NegativeAmount);
    }
    Ok(())
}
