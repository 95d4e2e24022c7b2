//! Detector page: email input, submit affordance and result card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use phishguard_app::DetectorState;

use super::ResultCard;
use crate::layout;
use crate::theme::{palette, styles};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const PLACEHOLDER: &str = "Paste the suspicious email content here...";
const TIP: &str = "Tip: Press Ctrl+S to analyze";

/// The detector form
pub struct DetectorView<'a> {
    detector: &'a DetectorState,
    spinner_frame: usize,
}

impl<'a> DetectorView<'a> {
    pub fn new(detector: &'a DetectorState, spinner_frame: usize) -> Self {
        Self {
            detector,
            spinner_frame,
        }
    }

    /// Tail of the buffer that fits in `width` x `height`, with a cursor.
    ///
    /// Rows are wrapped here rather than by `Paragraph` so the row count is
    /// exact and the end of the buffer never scrolls out of view.
    fn input_lines(&self, width: u16, height: u16) -> Vec<Line<'a>> {
        let text = self.detector.email_text.as_str();
        if text.is_empty() {
            return vec![Line::from(vec![
                Span::styled("▏", styles::accent()),
                Span::styled(PLACEHOLDER, styles::text_muted()),
            ])];
        }

        let width = usize::from(width).max(1);
        let mut rows = wrap_rows(text, width);
        if rows.last().is_some_and(|row| row.width() >= width) {
            rows.push(String::new());
        }

        let skip = rows.len().saturating_sub(usize::from(height));
        let last = rows.len() - 1;
        rows.into_iter()
            .enumerate()
            .skip(skip)
            .map(|(i, row)| {
                let mut spans = vec![Span::styled(row, styles::text_primary())];
                if i == last {
                    spans.push(Span::styled("▏", styles::accent()));
                }
                Line::from(spans)
            })
            .collect()
    }

    fn meta_line(&self) -> Line<'a> {
        if let Some(message) = &self.detector.validation_error {
            return Line::styled(format!("⚠ {}", message), styles::validation_error());
        }
        if self.detector.email_text.is_empty() {
            Line::styled(TIP, styles::text_muted())
        } else {
            Line::styled(
                format!("{} characters", self.detector.char_count()),
                styles::text_muted(),
            )
        }
    }

    fn submit_line(&self) -> Line<'a> {
        if self.detector.pending {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            Line::styled(format!(" {} Analyzing... ", frame), styles::disabled())
        } else if self.detector.can_submit() {
            Line::from(vec![
                Span::styled(" 🔍 Analyze Email ", styles::focused_selected()),
                Span::styled("  Ctrl+S", styles::keybinding()),
            ])
        } else {
            Line::styled(" 🔍 Analyze Email ", styles::disabled())
        }
    }
}

impl Widget for DetectorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = layout::detector(area);

        let input_block = styles::glass_block(true)
            .title(Span::styled(" Email Content ", styles::heading()))
            .style(Style::default().bg(palette::CARD_BG));
        let input_inner = input_block.inner(areas.input);
        input_block.render(areas.input, buf);
        Paragraph::new(self.input_lines(input_inner.width, input_inner.height))
            .render(input_inner, buf);

        Paragraph::new(self.meta_line()).render(areas.meta, buf);
        Paragraph::new(self.submit_line()).render(areas.submit, buf);

        if let Some(result) = &self.detector.last_result {
            ResultCard::new(result).render(areas.result, buf);
        }
    }
}

/// Hard-wrap `text` into rows at most `width` columns wide
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }
    rows
}
