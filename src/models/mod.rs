//! Data models for the FRA dashboard
//!
//! This module contains the core data structures:
//! - Claim records and the claim list backing the table
//! - Scheme metadata for the claim details modal
//! - Fixed summary counters and the sample CRI score
//! - Enums for state management

pub mod claims;
pub mod enums;
pub mod schemes;
pub mod summary;

// Re-exports for convenient access
pub use claims::{Claim, ClaimBook};
pub use enums::{ClaimFilter, ClaimType, Tab};
pub use schemes::scheme_info;
pub use summary::{Counter, ResilienceIndex, SUMMARY_COUNTERS};
