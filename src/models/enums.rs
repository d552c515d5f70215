//! Enums used throughout the dashboard
//!
//! This module contains the tab, claim type and filter enums used for
//! state management and UI rendering.

use serde::{Deserialize, Serialize};

/// Top-level dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    DecisionSupport, // Counters, claims table and scheme modal
    Resilience,      // Community Resilience Index
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::DecisionSupport, Tab::Resilience];

    pub fn toggle(&self) -> Self {
        match self {
            Tab::DecisionSupport => Tab::Resilience,
            Tab::Resilience => Tab::DecisionSupport,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::DecisionSupport => "Decision Support System",
            Tab::Resilience => "CRI – Community Resilience Index",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::DecisionSupport => 0,
            Tab::Resilience => 1,
        }
    }
}

/// FRA claim type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    #[serde(rename = "IFR")]
    Individual,
    #[serde(rename = "CR")]
    Community,
    #[serde(rename = "CFR")]
    CommunityForestResource,
}

impl ClaimType {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::Individual => "IFR",
            ClaimType::Community => "CR",
            ClaimType::CommunityForestResource => "CFR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ifr" => Some(ClaimType::Individual),
            "cr" => Some(ClaimType::Community),
            "cfr" => Some(ClaimType::CommunityForestResource),
            _ => None,
        }
    }
}

/// Claim type filter for the claims table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimFilter {
    #[default]
    All,
    Only(ClaimType),
}

impl ClaimFilter {
    /// Cycle All -> IFR -> CR -> CFR -> All
    pub fn next(&self) -> Self {
        match self {
            ClaimFilter::All => ClaimFilter::Only(ClaimType::Individual),
            ClaimFilter::Only(ClaimType::Individual) => ClaimFilter::Only(ClaimType::Community),
            ClaimFilter::Only(ClaimType::Community) => {
                ClaimFilter::Only(ClaimType::CommunityForestResource)
            }
            ClaimFilter::Only(ClaimType::CommunityForestResource) => ClaimFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimFilter::All => "All",
            ClaimFilter::Only(claim_type) => claim_type.label(),
        }
    }

    pub fn matches(&self, claim_type: ClaimType) -> bool {
        match self {
            ClaimFilter::All => true,
            ClaimFilter::Only(wanted) => *wanted == claim_type,
        }
    }
}
