//! Site configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reveal::RevealPolicy;

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the hero and navbar
    pub owner_name: String,
    /// Tagline under the name
    pub role: String,
    /// Simulated send delay for the contact form
    pub submit_delay_ms: u64,
    /// CSS root margin applied to every section's reveal observer
    pub reveal_margin: String,
    /// Fraction of remaining scroll distance covered per frame
    pub scroll_smoothing: f64,
    /// Initial window geometry
    pub window: WindowConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Omar Refay".to_string(),
            role: "Full Stack Developer".to_string(),
            submit_delay_ms: 1000,
            reveal_margin: "-100px".to_string(),
            scroll_smoothing: 0.12,
            window: WindowConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.reveal_policy()?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Reveal policy shared by all sections.
    pub fn reveal_policy(&self) -> Result<RevealPolicy, ConfigError> {
        RevealPolicy::once_with_margin(&self.reveal_margin)
    }
}

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1000));
        assert_eq!(config.reveal_policy().unwrap(), RevealPolicy::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SiteConfig::from_json_str(r#"{"submit_delay_ms": 250, "window": {"width": 800}}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 860.0);
        assert_eq!(config.owner_name, "Omar Refay");
    }

    #[test]
    fn test_bad_margin_rejected() {
        let err = SiteConfig::from_json_str(r#"{"reveal_margin": "lots"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRootMargin(_)));
    }

    #[test]
    fn test_non_finite_margin_rejected() {
        let err = SiteConfig::from_json_str(r#"{"reveal_margin": "NaNpx"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRootMargin(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"owner_name": "Ada"}}"#).unwrap();
        let config = SiteConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.owner_name, "Ada");

        let missing = SiteConfig::from_json_file(Path::new("/nonexistent/folio.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
