//! Static marketing pages: Home, About Us, Why Us and Team

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use phishguard_core::Page;

use crate::theme::{palette, styles};

/// One titled section of a static page
struct Section {
    title: &'static str,
    body: &'static str,
}

const HOME_STATS: [(&str, &str); 4] = [
    ("99.8%", "Accuracy Rate"),
    ("50K+", "Emails Analyzed"),
    ("<2s", "Analysis Time"),
    ("24/7", "Protection"),
];

const HOME_STEPS: [Section; 3] = [
    Section {
        title: "1. Paste Email",
        body: "Copy and paste the suspicious email content into our analyzer",
    },
    Section {
        title: "2. AI Analysis",
        body: "Our machine learning model analyzes patterns and indicators",
    },
    Section {
        title: "3. Get Results",
        body: "Receive instant feedback on whether the email is safe or malicious",
    },
];

const ABOUT_SECTIONS: [Section; 3] = [
    Section {
        title: "Our Vision",
        body: "We envision a world where everyone can communicate online safely without fear of falling victim to phishing attacks and email scams.",
    },
    Section {
        title: "Our Mission",
        body: "Our mission is to provide fast, accurate, and accessible phishing detection tools that empower users to identify threats before they cause harm.",
    },
    Section {
        title: "Our Story",
        body: "PhishGuard AI was founded by a team of cybersecurity experts and data scientists who recognized the growing threat of phishing attacks in our increasingly digital world.",
    },
];

const WHY_SECTIONS: [Section; 4] = [
    Section {
        title: "Lightning Fast",
        body: "Our optimized AI models analyze emails in under 2 seconds, providing instant feedback so you can make quick security decisions without delays.",
    },
    Section {
        title: "99.8% Accuracy",
        body: "Trained on millions of real-world phishing examples, our system achieves industry-leading accuracy with minimal false positives.",
    },
    Section {
        title: "Privacy Focused",
        body: "We never store your email content. All analysis happens in real-time and data is immediately discarded after processing.",
    },
    Section {
        title: "Constantly Improving",
        body: "Our models are continuously updated with the latest phishing tactics, ensuring you're always protected against emerging threats.",
    },
];

const TEAM_SECTIONS: [Section; 3] = [
    Section {
        title: "Machine Learning",
        body: "Data scientists who train and evaluate the classification model on real-world phishing corpora.",
    },
    Section {
        title: "Security Research",
        body: "Cybersecurity professionals who track emerging phishing tactics and curate the training data.",
    },
    Section {
        title: "Product & Design",
        body: "Engineers who keep the detector simple: paste an email, get a clear answer.",
    },
];

/// Static content for a non-detector destination
pub struct PageContent {
    page: Page,
}

impl PageContent {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.page {
            Page::Home => home_lines(),
            Page::About => titled(
                "About PhishGuard AI",
                "Protecting users from cyber threats through advanced artificial intelligence",
                &ABOUT_SECTIONS,
            ),
            Page::WhyUs => titled(
                "Why Choose PhishGuard AI?",
                "Industry-leading phishing detection with unmatched accuracy and speed",
                &WHY_SECTIONS,
            ),
            Page::Team => titled(
                "Meet the Team",
                "Cybersecurity professionals and AI researchers",
                &TEAM_SECTIONS,
            ),
            Page::Detector => Vec::new(),
        }
    }
}

fn titled(title: &'static str, tagline: &'static str, sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(title, styles::heading()),
        Line::styled(tagline, styles::text_secondary()),
        Line::raw(""),
    ];
    push_sections(&mut lines, sections);
    lines
}

fn push_sections(lines: &mut Vec<Line<'static>>, sections: &[Section]) {
    for section in sections {
        lines.push(Line::styled(section.title, styles::subheading()));
        lines.push(Line::styled(section.body, styles::text_secondary()));
        lines.push(Line::raw(""));
    }
}

fn home_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("Protect Yourself from Phishing Attacks", styles::heading()),
        Line::styled(
            "Analyze suspicious emails in seconds and protect your sensitive information.",
            styles::text_secondary(),
        ),
        Line::raw(""),
    ];

    let mut stats = Vec::new();
    for (value, label) in HOME_STATS {
        stats.push(Span::styled(
            value,
            Style::default().fg(palette::ACCENT_ALT),
        ));
        stats.push(Span::styled(format!(" {}   ", label), styles::text_muted()));
    }
    lines.push(Line::from(stats));
    lines.push(Line::raw(""));

    lines.push(Line::styled("How It Works", styles::subheading()));
    for step in &HOME_STEPS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", step.title), styles::accent()),
            Span::styled(step.body, styles::text_secondary()),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled(" Press Enter ", styles::focused_selected()),
        Span::styled(" to launch the detector", styles::text_secondary()),
    ]));
    lines
}

impl Widget for PageContent {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
