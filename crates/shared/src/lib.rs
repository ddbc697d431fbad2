//! Shared types and errors for Crowdvault.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The application-wide error taxonomy

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
