//! # Courtside Domain
//!
//! Business domain types and models for the Courtside booking platform.
//!
//! This crate contains:
//! - Domain data types (UserProfile, Club, OpenMatch, Booking, etc.)
//! - Request payload types consumed by the API facades
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Courtside crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use types::*;
