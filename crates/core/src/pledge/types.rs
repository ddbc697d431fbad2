//! Pledge ledger data types.

use crowdvault_shared::types::PartyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An external fund transfer owed to a party.
///
/// Withdraw and collect return a `Payout` instead of moving money
/// themselves: all internal bookkeeping is complete by the time the caller
/// holds this value, so executing the transfer afterwards can never observe
/// stale balances (check-effects-interaction ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "a payout must be settled externally after the ledger call returns"]
pub struct Payout {
    /// Recipient of the funds.
    pub to: PartyId,
    /// Amount leaving escrow.
    pub amount: Decimal,
}
