//! Color theme constants
//!
//! Dark palette with a red brand accent.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Brand red: logo, active sidebar entry, active reactions
pub const COLOR_BRAND: Color = Color::Rgb(220, 38, 38);

/// Panel and card borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and selected card borders
pub const COLOR_ACCENT: Color = Color::White;

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text: channel names, counts, hints
pub const COLOR_DIM: Color = Color::Gray;

/// Key hint letters in the footer
pub const COLOR_KEY: Color = Color::Cyan;

// ============================================================================
// States
// ============================================================================

/// Spinner and loading captions
pub const COLOR_LOADING: Color = Color::LightBlue;

/// Failure headings and inline login errors
pub const COLOR_ERROR: Color = Color::LightRed;

/// Focused input fields
pub const COLOR_INPUT_FOCUS: Color = Color::LightGreen;
