//! Semantic style builders.

use phishguard_core::Outcome;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn subheading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::WARNING)
}

/// "Black on Cyan" - selected tab and enabled submit button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

pub fn validation_error() -> Style {
    Style::default().fg(palette::WARNING)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Outcome mapping ---

/// `(icon, headline, Style)` for a rendered analysis outcome
pub fn outcome_indicator(outcome: Outcome) -> (&'static str, &'static str, Style) {
    match outcome {
        Outcome::Phishing => (
            "⚠",
            "Phishing Detected!",
            Style::default()
                .fg(palette::PHISHING)
                .add_modifier(Modifier::BOLD),
        ),
        Outcome::Safe => (
            "✓",
            "Email Appears Safe",
            Style::default()
                .fg(palette::SAFE)
                .add_modifier(Modifier::BOLD),
        ),
        Outcome::Error => (
            "✗",
            "Connection Error",
            Style::default()
                .fg(palette::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
    }
}
