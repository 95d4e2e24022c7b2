//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;
use phishguard_app::state::AppState;
use phishguard_core::Page;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function; it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.variant, state.current_page),
        areas.header,
    );

    match state.current_page {
        Page::Detector => frame.render_widget(
            widgets::DetectorView::new(&state.detector, state.spinner_frame),
            areas.body,
        ),
        page => frame.render_widget(widgets::PageContent::new(page), areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
