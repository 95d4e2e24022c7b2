//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header with title and navigation tabs
    pub header: Rect,

    /// Page content
    pub body: Rect,

    /// Single-row status bar with key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Areas inside the detector card
#[derive(Debug, Clone, Copy)]
pub struct DetectorAreas {
    pub input: Rect,
    /// Character count, tip or validation message
    pub meta: Rect,
    pub submit: Rect,
    pub result: Rect,
}

/// Split the detector card: input on top, result card below
pub fn detector(area: Rect) -> DetectorAreas {
    let chunks = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Percentage(55),
    ])
    .split(area);

    DetectorAreas {
        input: chunks[0],
        meta: chunks[1],
        submit: chunks[2],
        result: chunks[3],
    }
}
