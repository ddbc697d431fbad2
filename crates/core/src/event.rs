//! Append-only event records for external observers.
//!
//! Every successful mutation of the ledger appends exactly one event; failed
//! operations append none. Events are recorded only after the corresponding
//! bookkeeping has fully applied, so an observer draining the log never sees
//! a mutation that did not happen.

use chrono::{DateTime, Utc};
use crowdvault_shared::types::{CampaignId, PartyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ledger event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A campaign was registered.
    CampaignCreated {
        /// Assigned campaign id.
        id: CampaignId,
        /// Campaign owner.
        owner: PartyId,
        /// Display title.
        title: String,
        /// Funding goal.
        goal: Decimal,
        /// Pledging deadline.
        deadline: DateTime<Utc>,
    },
    /// Funds moved from a pledger into campaign escrow.
    Pledged {
        /// The pledging party.
        pledger: PartyId,
        /// Target campaign.
        id: CampaignId,
        /// Amount added to the pledge.
        amount: Decimal,
    },
    /// Funds returned from campaign escrow to a pledger.
    PledgeWithdrawn {
        /// The withdrawing party.
        pledger: PartyId,
        /// Source campaign.
        id: CampaignId,
        /// Amount withdrawn.
        amount: Decimal,
    },
    /// The aggregate pledged total was paid out to the campaign owner.
    CollectedPledges {
        /// The campaign owner.
        owner: PartyId,
        /// Settled campaign.
        id: CampaignId,
        /// Amount paid out.
        amount: Decimal,
    },
}

impl LedgerEvent {
    /// The campaign this event concerns.
    #[must_use]
    pub const fn campaign_id(&self) -> CampaignId {
        match self {
            Self::CampaignCreated { id, .. }
            | Self::Pledged { id, .. }
            | Self::PledgeWithdrawn { id, .. }
            | Self::CollectedPledges { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_campaign_id_accessor() {
        let event = LedgerEvent::Pledged {
            pledger: PartyId::new(),
            id: CampaignId(4),
            amount: dec!(25),
        };
        assert_eq!(event.campaign_id(), CampaignId(4));
    }

    #[test]
    fn test_serde_tagging() {
        let event = LedgerEvent::CampaignCreated {
            id: CampaignId(0),
            owner: PartyId::new(),
            title: "Solar well".to_string(),
            goal: dec!(100),
            deadline: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "campaign_created");
        assert_eq!(json["id"], 0);
    }
}
