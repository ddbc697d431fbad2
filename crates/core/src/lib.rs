//! Core escrow ledger logic for Crowdvault.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Caller identity and the current time are always supplied
//! explicitly by the caller, which keeps the campaign state machine
//! deterministic and testable without a real clock or transport.
//!
//! # Modules
//!
//! - `campaign` - Campaign registry: creation, immutable parameters, lookup
//! - `pledge` - Pledge ledger: pledge, withdraw, and collect accounting
//! - `event` - Append-only event records for external observers

pub mod campaign;
pub mod event;
pub mod pledge;
