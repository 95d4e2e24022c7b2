//! Core domain types: navigation, verdicts and analysis outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// A navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Detector,
    About,
    WhyUs,
    Team,
}

impl Page {
    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Detector => "Detector",
            Page::About => "About Us",
            Page::WhyUs => "Why Us",
            Page::Team => "Team",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which navigation layout the site uses.
///
/// Both layouts share Home, Detector and About; the fourth destination is
/// either the "Why Us" pitch or the team page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteVariant {
    #[default]
    WhyUs,
    Team,
}

const WHY_US_PAGES: [Page; 4] = [Page::Home, Page::Detector, Page::About, Page::WhyUs];
const TEAM_PAGES: [Page; 4] = [Page::Home, Page::Detector, Page::About, Page::Team];

impl SiteVariant {
    /// Destinations in navigation order
    pub fn pages(&self) -> &'static [Page] {
        match self {
            SiteVariant::WhyUs => &WHY_US_PAGES,
            SiteVariant::Team => &TEAM_PAGES,
        }
    }

    pub fn contains(&self, page: Page) -> bool {
        self.pages().contains(&page)
    }

    /// Position of `page` in the navigation bar
    pub fn index_of(&self, page: Page) -> Option<usize> {
        self.pages().iter().position(|p| *p == page)
    }

    /// Page following `page`, wrapping around
    pub fn next(&self, page: Page) -> Page {
        let pages = self.pages();
        let idx = self.index_of(page).map(|i| (i + 1) % pages.len()).unwrap_or(0);
        pages[idx]
    }

    /// Page preceding `page`, wrapping around
    pub fn previous(&self, page: Page) -> Page {
        let pages = self.pages();
        let idx = self
            .index_of(page)
            .map(|i| (i + pages.len() - 1) % pages.len())
            .unwrap_or(0);
        pages[idx]
    }

    /// Parse a CLI-style variant name (`why-us`, `why_us`, `why`, `team`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "why-us" | "why_us" | "why" => Some(SiteVariant::WhyUs),
            "team" => Some(SiteVariant::Team),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Binary label returned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// `prediction == 1`
    Phishing,
    /// `prediction == 0`
    Legitimate,
}

/// Percentage shown next to a verdict, in `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, for gauges
    pub fn ratio(&self) -> f64 {
        (self.0 / 100.0).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// A successfully interpreted classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub label: Label,
    /// Probability of the phishing class, whichever label won
    pub probability: Option<f64>,
}

impl Verdict {
    pub fn phishing(probability: Option<f64>) -> Self {
        Self {
            label: Label::Phishing,
            probability,
        }
    }

    pub fn legitimate(probability: Option<f64>) -> Self {
        Self {
            label: Label::Legitimate,
            probability,
        }
    }

    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }

    /// Confidence in the winning label.
    ///
    /// Phishing shows `probability × 100`; legitimate shows
    /// `(1 − probability) × 100`. `None` when the service sent no probability.
    pub fn confidence(&self) -> Option<Confidence> {
        let p = self.probability?;
        let percent = match self.label {
            Label::Phishing => p * 100.0,
            Label::Legitimate => (1.0 - p) * 100.0,
        };
        Some(Confidence(percent))
    }
}

/// The three rendered outcomes of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Safe,
    Phishing,
    Error,
}

/// Result of one submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Verdict(Verdict),
    /// Produced locally when the call fails or the response is unusable
    Failed { message: String },
}

impl AnalysisResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            AnalysisResult::Verdict(v) if v.is_phishing() => Outcome::Phishing,
            AnalysisResult::Verdict(_) => Outcome::Safe,
            AnalysisResult::Failed { .. } => Outcome::Error,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            AnalysisResult::Verdict(v) => Some(v),
            AnalysisResult::Failed { .. } => None,
        }
    }
}

/// Identifies one submit cycle so stale completions can be discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct AnalysisToken(u64);

impl AnalysisToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AnalysisToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
