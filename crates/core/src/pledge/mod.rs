//! Pledge ledger.
//!
//! This module implements the escrow accounting around campaigns:
//! - Per-campaign, per-pledger pledge balances
//! - The pledge / withdraw / collect operations
//! - The deadline and goal state machine with its authorization rules
//! - Error types for ledger operations

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::PledgeError;
pub use ledger::EscrowLedger;
pub use types::Payout;
