use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Message defaults held by a `ButtonBuilder`.
///
/// Per-call values in `MessageOptions` take precedence over these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    /// Whether generated messages are view-once
    #[serde(default = "default_view_once")]
    pub view_once: bool,

    /// Header type written to every message
    #[serde(default = "default_header_type")]
    pub header_type: u32,
}

fn default_view_once() -> bool {
    true
}

fn default_header_type() -> u32 {
    1
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            view_once: default_view_once(),
            header_type: default_header_type(),
        }
    }
}

impl ButtonConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read button config file: {}",
                path.as_ref().display()
            )
        })?;

        let config: ButtonConfig = serde_json::from_str(&content)
            .with_context(|| "Failed to parse button config JSON")?;

        Ok(config)
    }

    /// Defaults overridden by environment variables.
    ///
    /// Environment:
    /// - PRINCE_BUTTONS_VIEW_ONCE   = 1|true|yes|on or 0|false|no|off
    /// - PRINCE_BUTTONS_HEADER_TYPE = <u32>
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of `self`. Unparseable values are
    /// logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("PRINCE_BUTTONS_VIEW_ONCE").ok().as_deref(),
            std::env::var("PRINCE_BUTTONS_HEADER_TYPE").ok().as_deref(),
        )
    }

    /// Apply raw override strings (as found in the environment) on top of `self`.
    pub fn with_overrides(mut self, view_once: Option<&str>, header_type: Option<&str>) -> Self {
        if let Some(raw) = view_once {
            match parse_flag(raw) {
                Some(flag) => self.view_once = flag,
                None => tracing::warn!("Ignoring unrecognized view-once value: {:?}", raw),
            }
        }

        if let Some(raw) = header_type {
            match raw.trim().parse::<u32>() {
                Ok(n) => self.header_type = n,
                Err(_) => tracing::warn!("Ignoring non-numeric header type: {:?}", raw),
            }
        }

        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let json = r#"{ "viewOnce": false, "headerType": 4 }"#;
        let config: ButtonConfig = serde_json::from_str(json).unwrap();
        assert!(!config.view_once);
        assert_eq!(config.header_type, 4);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ButtonConfig = serde_json::from_str(r#"{ "headerType": 2 }"#).unwrap();
        assert!(config.view_once);
        assert_eq!(config.header_type, 2);
    }

    #[test]
    fn test_override_parsing() {
        let config = ButtonConfig::default().with_overrides(Some(" OFF "), Some("3"));
        assert_eq!(
            config,
            ButtonConfig {
                view_once: false,
                header_type: 3
            }
        );

        // Garbage leaves the previous values untouched
        let config = config.with_overrides(Some("maybe"), Some("three"));
        assert!(!config.view_once);
        assert_eq!(config.header_type, 3);
    }
}
