//! Header bar with the app title and navigation tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use phishguard_core::{Page, SiteVariant};

use crate::theme::{palette, styles};

/// Main header showing the app title and one tab per destination
pub struct MainHeader {
    variant: SiteVariant,
    current: Page,
}

impl MainHeader {
    pub fn new(variant: SiteVariant, current: Page) -> Self {
        Self { variant, current }
    }

    fn title_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::raw(" "),
            Span::styled("🛡", Style::default().fg(palette::ACCENT_ALT)),
            Span::raw(" "),
            Span::styled(
                "PhishGuard AI",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    }

    /// Numbered tabs, the active one highlighted
    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, page) in self.variant.pages().iter().enumerate() {
            let label = format!(" {} {} ", i + 1, page.label());
            if *page == self.current {
                spans.push(Span::styled(label, styles::focused_selected()));
            } else {
                spans.push(Span::styled(label, styles::text_secondary()));
            }
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(self.title_spans());
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Tabs are right-aligned when they fit beside the title, otherwise
        // they replace it
        let tabs = Line::from(self.tab_spans());
        let tabs_width = tabs.width() as u16;
        if title_width + tabs_width + 2 <= inner.width {
            let x = inner.x + inner.width - tabs_width;
            buf.set_line(x, inner.y, &tabs, tabs_width);
        } else {
            buf.set_line(inner.x, inner.y, &tabs, inner.width);
        }
    }
}
