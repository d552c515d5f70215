//! UI module for fra-dss
//!
//! This module contains UI rendering functions for the dashboard,
//! including the navbar tabs, counter cards, claims table, claim details
//! modal and the resilience index tab.

mod claims;
mod helpers;
mod modal;
mod render;
mod resilience;
mod stats;

pub use render::draw;
