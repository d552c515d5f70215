//! Theme module for fra-dss
//!
//! This module provides a centralized color palette and styling constants
//! for the ministry portal look: navy chrome, light blue cards.

use ratatui::style::Color;

// ============================================================================
// Chrome Colors - Navy
// ============================================================================

/// Navbar and table header navy (#003366)
pub const NAVY: Color = Color::Rgb(0, 51, 102);

/// Active tab highlight (#005bb5)
pub const NAVY_ACTIVE: Color = Color::Rgb(0, 91, 181);

/// "View" action blue (#0071bc)
pub const ACTION_BLUE: Color = Color::Rgb(0, 113, 188);

// ============================================================================
// Card Colors
// ============================================================================

/// Summary card background (#e8f1ff)
pub const CARD_BG: Color = Color::Rgb(232, 241, 255);

/// Scheme card background (#f4f9ff)
pub const SCHEME_BG: Color = Color::Rgb(244, 249, 255);

// ============================================================================
// Text Colors
// ============================================================================

/// Text on navy
pub const TEXT_ON_NAVY: Color = Color::Rgb(255, 255, 255);

/// Body text on light cards (#1e293b)
pub const TEXT_DARK: Color = Color::Rgb(30, 41, 59);

/// Hints and labels (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Resilience "Moderate" amber (#fbbf24)
pub const AMBER: Color = Color::Rgb(251, 191, 36);
