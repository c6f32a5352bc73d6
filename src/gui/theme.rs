//! GUI theme: dark slate with indigo accents.
//!
//! Color constants for the settings panel, matching the dark admin UI of
//! the server this panel administers.

use eframe::egui::Color32;

// Backgrounds

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
/// Section frames and cards
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 41, 55);
/// Input fields and the info banner
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(55, 65, 81);

// Text

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(229, 231, 235);
/// Labels and secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
/// Hints and fine print
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

// Accents

/// Primary actions (Save)
pub const ACCENT_INDIGO: Color32 = Color32::from_rgb(129, 140, 248);
/// Success states and toasts
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(52, 211, 153);
/// Errors, validation messages, failure toasts
pub const ACCENT_RED: Color32 = Color32::from_rgb(248, 113, 113);
/// Info toasts and links
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(34, 211, 238);
/// Warning actions (Test)
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(251, 191, 36);
