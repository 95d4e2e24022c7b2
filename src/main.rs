//! PhishGuard - terminal phishing-email detector
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use phishguard_app::config::{self, Settings};
use phishguard_client::HttpClassifier;
use phishguard_core::{logging, SiteVariant};

/// PhishGuard - classify suspicious emails from the terminal
#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(about = "Detect phishing emails with a remote classification service", long_about = None)]
struct Args {
    /// Classification endpoint URL (overrides config and PHISHGUARD_ENDPOINT)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Navigation layout: why-us or team
    #[arg(long, value_parser = parse_variant)]
    variant: Option<SiteVariant>,

    /// Directory containing .phishguard/config.toml (default: current dir)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Read the email from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI); reads stdin without --file
    #[arg(long)]
    headless: bool,

    /// Write a default .phishguard/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_variant(s: &str) -> Result<SiteVariant, String> {
    SiteVariant::parse(s).ok_or_else(|| format!("unknown variant '{}' (expected why-us or team)", s))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let config_root = args
        .config
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        config::init_config_dir(&config_root)?;
        eprintln!(
            "Wrote {}",
            config_root.join(".phishguard").join("config.toml").display()
        );
        return Ok(());
    }

    let settings = resolve_settings(&args, &config_root);
    let endpoint = config::resolve_endpoint(&settings.client)?;
    let classifier = HttpClassifier::new(endpoint, settings.client.timeout());

    let preload = args.file.as_deref().map(read_email_file).transpose()?;

    if args.headless {
        let email = match preload {
            Some(text) => text,
            None => read_stdin()?,
        };
        if !headless::runner::run_headless(settings, classifier, email).await? {
            std::process::exit(1);
        }
        Ok(())
    } else {
        phishguard_tui::run(settings, classifier, preload).await?;
        Ok(())
    }
}

/// File settings, then environment, then CLI flags
fn resolve_settings(args: &Args, config_root: &Path) -> Settings {
    let mut settings = config::load_settings(config_root);
    config::apply_env_overrides(&mut settings);

    if let Some(endpoint) = &args.endpoint {
        settings.client.endpoint = endpoint.clone();
    }
    if let Some(variant) = args.variant {
        settings.ui.variant = variant;
    }
    settings
}

fn read_email_file(path: &Path) -> color_eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> color_eyre::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .wrap_err("Failed to read email from stdin")?;
    if text.is_empty() {
        return Err(eyre!("No email on stdin; pass --file or pipe the email in"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("team"), Ok(SiteVariant::Team));
        assert_eq!(parse_variant("why-us"), Ok(SiteVariant::WhyUs));
        assert!(parse_variant("pricing").is_err());
    }

    #[test]
    fn test_cli_flags_override_settings() {
        let temp = tempfile::tempdir().unwrap();
        let args = Args::parse_from([
            "phishguard",
            "--endpoint",
            "http://127.0.0.1:5000/predict",
            "--variant",
            "team",
        ]);

        let settings = resolve_settings(&args, temp.path());

        assert_eq!(settings.client.endpoint, "http://127.0.0.1:5000/predict");
        assert_eq!(settings.ui.variant, SiteVariant::Team);
    }

    #[test]
    fn test_headless_flags_parse() {
        let args = Args::parse_from(["phishguard", "--headless", "--file", "mail.eml"]);
        assert!(args.headless);
        assert_eq!(args.file, Some(PathBuf::from("mail.eml")));
    }
}
