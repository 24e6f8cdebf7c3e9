//! Entry point for the Folio portfolio.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_core::{ScrollEffects, SiteConfig};
use folio_logging::{FolioSubscriberBuilder, LogConfig};

use folio_site::components::App;
use folio_site::state::{set_site_options, SiteOptions};

const SHARED_CSS: &str = folio_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// JSON site config; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated contact-form send delay
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Make every contact submission fail
    #[arg(long)]
    fail_submissions: bool,

    /// Directory for the JSONL log file
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,

    /// Debug-level console output
    #[arg(short, long)]
    verbose: bool,

    /// Window width in logical px
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Window height in logical px
    #[arg(long, requires = "width")]
    height: Option<f64>,
}

impl Args {
    /// Load the config file, if any, and apply command-line overrides.
    fn site_config(&self) -> SiteConfig {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_json_file(path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load site config, using defaults");
                SiteConfig::default()
            }),
            None => SiteConfig::default(),
        };

        if let Some(ms) = self.submit_delay_ms {
            config.submit_delay_ms = ms;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            config.window.width = width;
            config.window.height = height;
        }
        config
    }

    /// Desktop logging by default; `--verbose` swaps in the debug console
    /// while keeping the JSONL file.
    fn log_builder(&self) -> FolioSubscriberBuilder {
        let desktop = LogConfig::desktop(self.log_dir.clone(), "folio");
        if !self.verbose {
            return FolioSubscriberBuilder::new().with_config(desktop);
        }
        let builder = FolioSubscriberBuilder::new().with_config(LogConfig::development());
        match desktop.file {
            Some(file) => builder.with_file_output(file),
            None => builder,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = args
        .log_builder()
        .init()
        .context("failed to initialize logging")?;

    let config = args.site_config();
    let _scroll_effects = ScrollEffects::register().context("failed to register scroll effects")?;

    tracing::info!(
        owner = %config.owner_name,
        fail_submissions = args.fail_submissions,
        "starting folio"
    );

    let window = WindowBuilder::new()
        .with_title(format!("{} | Portfolio", config.owner_name))
        .with_maximized(false)
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

    set_site_options(SiteOptions {
        config,
        fail_submissions: args.fail_submissions,
    });

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap" rel="stylesheet">
                    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "folio",
            "--submit-delay-ms",
            "250",
            "--width",
            "800",
            "--height",
            "600",
        ]);
        let config = args.site_config();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.owner_name, SiteConfig::default().owner_name);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let args = Args::parse_from(["folio", "--config", "/nonexistent/folio.json"]);
        assert_eq!(args.site_config(), SiteConfig::default());
    }

    #[test]
    fn test_verbose_logging_keeps_file_output() {
        let args = Args::parse_from(["folio", "--verbose", "--log-dir", "/tmp/folio-logs"]);
        let builder = args.log_builder();
        let config = builder.config();
        assert_eq!(config.console.level.as_deref(), Some("debug"));
        assert_eq!(
            config.file.as_ref().map(|f| f.directory.clone()),
            Some(PathBuf::from("/tmp/folio-logs"))
        );

        let quiet = Args::parse_from(["folio"]).log_builder();
        assert_eq!(quiet.config().console.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_width_requires_height() {
        assert!(Args::try_parse_from(["folio", "--width", "800"]).is_err());
    }
}
