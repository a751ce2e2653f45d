use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Ask the terminal
    Auto,
    TrueColor,
    Ansi256,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    // how many ranked candidates to report
    pub top: usize,
    // None = enumerate every factor pair
    pub max_candidates: Option<usize>,
    pub preview: bool,
    pub color: ColorMode,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            top: 5,
            max_candidates: None,
            preview: true,
            color: ColorMode::Auto,
        }
    }
}

impl SniffConfig {
    pub fn load() -> Option<Self> {
        let config_path = Self::config_path()?;

        fs::read_to_string(&config_path)
            .ok()
            .and_then(|contents| Self::from_json(&contents))
    }

    pub fn from_json(contents: &str) -> Option<Self> {
        serde_json::from_str(contents)
            .map_err(|e| log::warn!("Ignoring malformed config: {}", e))
            .ok()
    }

    fn config_path() -> Option<PathBuf> {
        #[allow(deprecated)]
        let home = std::env::home_dir()?;
        Some(home.join(".config").join("rgbsniff").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = SniffConfig::from_json(r#"{ "top": 10, "color": "ansi256" }"#).unwrap();
        assert_eq!(
            config,
            SniffConfig {
                top: 10,
                color: ColorMode::Ansi256,
                ..SniffConfig::default()
            }
        );
    }

    #[test]
    fn malformed_file_is_ignored() {
        assert_eq!(SniffConfig::from_json("{ top: "), None);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SniffConfig {
            max_candidates: Some(1000),
            preview: false,
            ..SniffConfig::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(SniffConfig::from_json(&json), Some(config));
    }
}
