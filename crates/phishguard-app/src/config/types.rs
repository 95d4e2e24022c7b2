//! Configuration types for PhishGuard
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ClientSettings` - Classification service endpoint and timeout
//! - `UiSettings` - Site variant and start page

use std::time::Duration;

use serde::{Deserialize, Serialize};

use phishguard_client::DEFAULT_ENDPOINT;
use phishguard_core::{Page, SiteVariant};

/// Bounds applied to `client.timeout_secs`
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Global settings from `.phishguard/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub client: ClientSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Classification service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientSettings {
    /// Full URL of the `/predict` endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Client-side deadline for one request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientSettings {
    /// Request timeout, clamped to a sane range
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Navigation layout
    #[serde(default)]
    pub variant: SiteVariant,

    /// Page shown at startup
    #[serde(default)]
    pub start_page: Page,
}
