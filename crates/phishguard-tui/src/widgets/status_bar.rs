//! Status bar widget
//!
//! Shows the analysis state, key hints for the active page, and the
//! classification service host.

use phishguard_app::state::AppState;
use phishguard_core::Outcome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use url::Url;

use crate::theme::{palette, styles};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Analysis state indicator
    fn state_indicator(&self) -> Span<'static> {
        let detector = &self.state.detector;
        if detector.pending {
            return Span::styled("● Analyzing", Style::default().fg(palette::WARNING));
        }
        match detector.last_result.as_ref().map(|r| r.outcome()) {
            Some(Outcome::Phishing) => {
                Span::styled("● Phishing", Style::default().fg(palette::PHISHING))
            }
            Some(Outcome::Safe) => Span::styled("● Safe", Style::default().fg(palette::SAFE)),
            Some(Outcome::Error) => {
                Span::styled("● Error", Style::default().fg(palette::WARNING))
            }
            None => Span::styled("○ Idle", styles::text_muted()),
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.on_detector() {
            vec![
                ("Ctrl+S", "analyze"),
                ("Ctrl+U", "clear"),
                ("Tab", "next page"),
                ("Esc", "quit"),
            ]
        } else {
            vec![
                ("1-4", "pages"),
                ("d", "detector"),
                ("Tab", "next page"),
                ("q", "quit"),
            ]
        }
    }

    /// Host of the configured endpoint, if it parses
    fn endpoint_host(&self) -> Option<String> {
        Url::parse(&self.state.settings.client.endpoint)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" "), self.state_indicator(), Span::raw("  ")];
        for (key, action) in self.key_hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        let left = Line::from(spans);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        if let Some(host) = self.endpoint_host() {
            let right = Line::styled(format!("{} ", host), styles::text_muted());
            let right_width = right.width() as u16;
            if left_width + right_width < area.width {
                buf.set_line(
                    area.x + area.width - right_width,
                    area.y,
                    &right,
                    right_width,
                );
            }
        }
    }
}
