//! Color palette for the portfolio theme.
//!
//! Status and level colors carry over the web version's card styling.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Foreground over accent fills

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Project status tags (web card colors) ---
pub const STATUS_COMPLETED: Color = Color::Rgb(40, 167, 69); // green
pub const STATUS_IN_PROGRESS: Color = Color::Rgb(253, 126, 20); // orange
pub const STATUS_PLANNED: Color = Color::Rgb(111, 66, 193); // violet

// --- Skill level badges (web badge colors) ---
pub const LEVEL_ADVANCED: Color = Color::Rgb(72, 219, 251); // bright cyan
pub const LEVEL_INTERMEDIATE: Color = Color::Rgb(56, 103, 214); // medium blue
pub const LEVEL_BEGINNER: Color = Color::Rgb(92, 122, 234); // lighter blue

// --- Notices ---
pub const NOTICE_ERROR: Color = Color::Red;
pub const NOTICE_WARNING: Color = Color::Yellow;
pub const NOTICE_INFO: Color = Color::Green;

// --- Links ---
pub const LINK: Color = Color::Blue;
