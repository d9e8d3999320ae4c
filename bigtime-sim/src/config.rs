//! Simulator configuration
//!
//! ```toml
//! [face]          # FaceConfig, every field optional
//! [scenario]
//! start = "09:05"
//! date = "2026-10-19"
//! clock_24h = false
//! battery = 85
//! image_capacity = 8      # optional memory limit
//! steps = ["tick", "tap", "wait 3000", "battery 20"]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use bigtime_core::config::FaceConfig;

use crate::error::SimError;

/// Configuration file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "watchface.toml";

/// Complete simulator configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub face: FaceConfig,
    pub scenario: ScenarioConfig,
}

/// Starting conditions and scripted events
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Start time, "HH:MM"
    pub start: String,
    /// Start date, "YYYY-MM-DD"
    pub date: String,
    pub clock_24h: bool,
    /// Initial battery charge in percent
    pub battery: u8,
    /// Most images the store can hold; unlimited when absent
    pub image_capacity: Option<usize>,
    pub steps: Vec<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            start: "09:05".into(),
            date: "2026-10-19".into(),
            clock_24h: false,
            battery: 85,
            image_capacity: None,
            steps: vec!["tick".into(), "tap".into(), "wait 3000".into()],
        }
    }
}

impl SimConfig {
    /// Parse a configuration from TOML text
    pub fn parse(text: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file
    ///
    /// With no explicit path, a missing `watchface.toml` means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SimError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        match fs::read_to_string(path) {
            Ok(text) => {
                log::info!("loaded {}", path.display());
                Self::parse(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                log::info!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SimError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(SimConfig::parse("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = SimConfig::parse(
            r#"
            [face.overlay]
            timeout_ms = 5000

            [scenario]
            start = "23:59"
            steps = ["tick"]
            "#,
        )
        .unwrap();

        assert_eq!(config.face.overlay.timeout_ms, 5000);
        assert_eq!(config.face.layout, FaceConfig::default().layout);
        assert_eq!(config.scenario.start, "23:59");
        assert_eq!(config.scenario.battery, 85);
        assert_eq!(config.scenario.steps, vec!["tick".to_string()]);
    }

    #[test]
    fn test_layout_override() {
        let config = SimConfig::parse(
            r#"
            [face.layout.overlay.time]
            x = 0
            y = 20
            width = 144
            height = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.face.layout.overlay.time.y, 20);
        assert_eq!(config.face.layout.overlay.date.y, 76);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = SimConfig::parse("[scenario]\nbattery = \"full\"\n");
        assert!(matches!(result, Err(SimError::Toml(_))));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = SimConfig::load(Some(Path::new("/nonexistent/watchface.toml")));
        assert!(matches!(result, Err(SimError::Io { .. })));
    }
}
