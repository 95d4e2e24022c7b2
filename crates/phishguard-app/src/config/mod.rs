//! Configuration file parsing for PhishGuard
//!
//! Supports:
//! - `.phishguard/config.toml` - Global settings
//! - `PHISHGUARD_ENDPOINT` - Endpoint override

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, init_config_dir, load_settings, resolve_endpoint, ENDPOINT_ENV_VAR,
};
pub use types::*;
