//! Color palette: slate backgrounds with blue/cyan accents.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(15, 23, 42);
pub const CARD_BG: Color = Color::Rgb(30, 41, 59);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_ALT: Color = Color::LightBlue;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Verdicts ---
pub const PHISHING: Color = Color::Red;
pub const SAFE: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
