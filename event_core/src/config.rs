//! # Wizard Configuration
//!
//! Option catalogues the step collaborators offer (categories, halls,
//! participation types, audiences). Loaded from TOML; every key is optional
//! and falls back to the built-in catalogue.
//!
//! ```toml
//! categories = ["Workshop", "Seminar"]
//! halls = ["Hall A", "Hall B"]
//! default_participation_type = "yes"
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{WizardError, WizardResult};
use crate::state::DEFAULT_PARTICIPATION_TYPE;

/// Environment variable front ends read a config path from
pub const CONFIG_ENV_VAR: &str = "EVENT_WIZARD_CONFIG";

static DEFAULT_CONFIG: Lazy<WizardConfig> = Lazy::new(|| WizardConfig {
    categories: to_strings(&["Workshop", "Seminar", "Lecture", "Training", "Conference", "Social"]),
    halls: to_strings(&["Main Auditorium", "Conference Hall", "Lecture Hall 1", "Lecture Hall 2", "Library Meeting Room"]),
    participation_types: to_strings(&["yes", "no"]),
    target_audiences: to_strings(&["Students", "Staff", "Faculty", "Public", "Everyone"]),
    default_participation_type: DEFAULT_PARTICIPATION_TYPE.to_string(),
});

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Option lists for the wizard's pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub categories: Vec<String>,
    pub halls: Vec<String>,
    pub participation_types: Vec<String>,
    pub target_audiences: Vec<String>,
    pub default_participation_type: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl WizardConfig {
    /// Parse TOML text. `origin` only labels errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> WizardResult<Self> {
        toml::from_str(contents).map_err(|e| WizardError::config_error(origin, e.to_string()))
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> WizardResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            WizardError::file_error("read config", path.display().to_string(), e.to_string())
        })?;
        let config = WizardConfig::from_toml_str(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), "loaded wizard config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise the built-in catalogue.
    pub fn load_or_default(path: Option<&Path>) -> WizardResult<Self> {
        match path {
            Some(p) => WizardConfig::load(p),
            None => Ok(WizardConfig::default()),
        }
    }

    /// Load from the path in [`CONFIG_ENV_VAR`], if set.
    pub fn from_env() -> WizardResult<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        WizardConfig::load_or_default(path.as_deref().map(Path::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_default_catalogue() {
        let config = WizardConfig::default();
        assert_eq!(config.participation_types, vec!["yes", "no"]);
        assert_eq!(config.default_participation_type, "yes");
        assert!(!config.halls.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WizardConfig::from_toml_str(r#"halls = ["Hall A", "Hall B"]"#, "inline").unwrap();
        assert_eq!(config.halls, vec!["Hall A", "Hall B"]);
        assert_eq!(config.categories, WizardConfig::default().categories);
        assert_eq!(config.default_participation_type, "yes");
    }

    #[test]
    fn test_malformed_toml() {
        let err = WizardConfig::from_toml_str("halls = [", "broken.toml").unwrap_err();
        assert!(matches!(err, WizardError::ConfigError { ref path, .. } if path == "broken.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_dir().join("event_wizard_test_config.toml");
        fs::write(&path, "default_participation_type = \"no\"\n").unwrap();

        let config = WizardConfig::load(&path).unwrap();
        assert_eq!(config.default_participation_type, "no");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = WizardConfig::load(temp_dir().join("event_wizard_missing.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert_eq!(WizardConfig::load_or_default(None).unwrap(), WizardConfig::default());
    }
}
