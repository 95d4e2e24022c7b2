//! Settings parser for .phishguard/config.toml

use std::path::Path;

use url::Url;

use super::types::{ClientSettings, Settings};
use phishguard_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const PHISHGUARD_DIR: &str = ".phishguard";

/// Environment variable that overrides `client.endpoint`
pub const ENDPOINT_ENV_VAR: &str = "PHISHGUARD_ENDPOINT";

/// Load settings from `.phishguard/config.toml` under `config_root`.
///
/// A missing, unreadable or invalid file yields defaults.
pub fn load_settings(config_root: &Path) -> Settings {
    let config_path = config_root.join(PHISHGUARD_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment overrides on top of file settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            debug!("Endpoint overridden by {}", ENDPOINT_ENV_VAR);
            settings.client.endpoint = endpoint.to_string();
        }
    }
}

/// Parse and check the configured endpoint URL
pub fn resolve_endpoint(client: &ClientSettings) -> Result<Url> {
    let url = Url::parse(client.endpoint.trim())
        .map_err(|e| Error::config(format!("Invalid endpoint '{}': {}", client.endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "Endpoint must use http or https, got '{}'",
            other
        ))),
    }
}

/// Create default config files in .phishguard/ directory
pub fn init_config_dir(config_root: &Path) -> Result<()> {
    let dir = config_root.join(PHISHGUARD_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .phishguard dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# PhishGuard Configuration

[client]
# Full URL of the classification endpoint
endpoint = "https://email-phishing-detector-3.onrender.com/predict"
# Seconds to wait for the service before giving up (1-120)
timeout_secs = 20

[ui]
# Navigation layout: "why_us" or "team"
variant = "why_us"
# Page shown at startup: "home", "detector", "about", "why_us" or "team"
start_page = "home"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}
