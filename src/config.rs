use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "water-quality.json";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field has a default, so the file is optional:
///
/// ```json
/// { "model_path": "artifacts/model.json", "window_width": 1000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub schema_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("pollution_model.json"),
            schema_path: PathBuf::from("model_columns.json"),
            window_width: 900.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Read [`CONFIG_FILE`] if present, otherwise use defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No {} found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("wqp-config-does-not-exist.json");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "model_path": "artifacts/model.json" }"#).unwrap();
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.json"));
        assert_eq!(config.schema_path, PathBuf::from("model_columns.json"));
        assert_eq!(config.window_width, 900.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<AppConfig>(r#"{ "modle_path": "x" }"#).is_err());
    }
}
