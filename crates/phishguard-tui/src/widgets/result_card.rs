//! Result card: one of the three analysis outcomes

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use phishguard_core::{AnalysisResult, Confidence};

use crate::theme::{palette, styles};

const PHISHING_SUMMARY: &str = "This email appears to be a phishing attempt. Do not click any links or provide personal information.";
const SAFE_SUMMARY: &str =
    "Our analysis suggests this email is likely legitimate. However, always stay vigilant.";
const PRO_TIP: &str = "Even legitimate-looking emails can be dangerous. Always verify sender addresses and hover over links before clicking.";

/// Common phishing indicators listed under a phishing verdict
pub const PHISHING_INDICATORS: [&str; 4] = [
    "Urgent language demanding immediate action",
    "Requests for personal or financial information",
    "Suspicious links or attachments",
    "Poor grammar or spelling errors",
];

/// Renders an [`AnalysisResult`] as a bordered card
pub struct ResultCard<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    fn body_lines(&self) -> Vec<Line<'a>> {
        match self.result {
            AnalysisResult::Failed { message } => vec![Line::styled(
                message.as_str(),
                styles::text_secondary(),
            )],
            AnalysisResult::Verdict(verdict) if verdict.is_phishing() => {
                let mut lines = vec![
                    Line::styled(PHISHING_SUMMARY, styles::text_secondary()),
                    Line::raw(""),
                    Line::styled("Common phishing indicators:", styles::subheading()),
                ];
                lines.extend(PHISHING_INDICATORS.iter().map(|indicator| {
                    Line::from(vec![
                        Span::styled("  • ", Style::default().fg(palette::PHISHING)),
                        Span::styled(*indicator, styles::text_secondary()),
                    ])
                }));
                lines
            }
            AnalysisResult::Verdict(_) => vec![
                Line::styled(SAFE_SUMMARY, styles::text_secondary()),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Pro tip: ", styles::keybinding()),
                    Span::styled(PRO_TIP, styles::text_secondary()),
                ]),
            ],
        }
    }

    /// Label and gauge color for the confidence row
    fn confidence_row(&self) -> Option<(&'static str, Confidence, Style)> {
        let verdict = self.result.verdict()?;
        let confidence = verdict.confidence()?;
        if verdict.is_phishing() {
            Some((
                "Threat Probability",
                confidence,
                Style::default().fg(palette::PHISHING),
            ))
        } else {
            Some((
                "Safety Score",
                confidence,
                Style::default().fg(palette::SAFE),
            ))
        }
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outcome = self.result.outcome();
        let (icon, headline, headline_style) = styles::outcome_indicator(outcome);

        let block = styles::glass_block(true)
            .border_style(headline_style)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", icon, headline), headline_style),
                Span::raw(" "),
            ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let confidence = self.confidence_row();
        let gauge_height = if confidence.is_some() { 1 } else { 0 };
        let [gauge_area, _, text_area] = Layout::vertical([
            Constraint::Length(gauge_height),
            Constraint::Length(gauge_height),
            Constraint::Min(0),
        ])
        .areas(inner);

        if let Some((label, confidence, style)) = confidence {
            Gauge::default()
                .gauge_style(style)
                .ratio(confidence.ratio())
                .label(format!("{}: {}", label, confidence))
                .render(gauge_area, buf);
        }

        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .render(text_area, buf);
    }
}
