use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StayError};

/// Per-person Kurtaxe charged by the municipality, in CHF.
pub const DEFAULT_KURTAXE_FEE: f64 = 3.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_kurtaxe_fee")]
    pub kurtaxe_fee: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub columns: ColumnNames,
}

/// Header names of the three columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_timestamp_column")]
    pub timestamp: String,
    #[serde(default = "default_total_column")]
    pub total: String,
    #[serde(default = "default_description_column")]
    pub description: String,
}

fn default_kurtaxe_fee() -> f64 {
    DEFAULT_KURTAXE_FEE
}

fn default_currency() -> String {
    "CHF".to_string()
}

fn default_timestamp_column() -> String {
    "Date/Time".to_string()
}

fn default_total_column() -> String {
    "Total".to_string()
}

fn default_description_column() -> String {
    "Items Description".to_string()
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp_column(),
            total: default_total_column(),
            description: default_description_column(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kurtaxe_fee: default_kurtaxe_fee(),
            currency: default_currency(),
            columns: ColumnNames::default(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("kyte-stays")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable files fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable settings file");
                Settings::default()
            }
        }
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if !settings.kurtaxe_fee.is_finite() || settings.kurtaxe_fee < 0.0 {
        return Err(StayError::Settings(format!(
            "Kurtaxe fee must be a non-negative number, got {}",
            settings.kurtaxe_fee
        )));
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| StayError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            kurtaxe_fee: 4.5,
            currency: "EUR".to_string(),
            columns: ColumnNames {
                timestamp: "When".to_string(),
                ..ColumnNames::default()
            },
        };
        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("nope.json"));
        assert_eq!(s.kurtaxe_fee, 3.2);
        assert_eq!(s.currency, "CHF");
        assert_eq!(s.columns.total, "Total");
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"kurtaxe_fee": 2.5, "columns": {"total": "Betrag"}}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.kurtaxe_fee, 2.5);
        assert_eq!(s.currency, "CHF");
        assert_eq!(s.columns.total, "Betrag");
        assert_eq!(s.columns.description, "Items Description");
    }

    #[test]
    fn test_load_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_save_creates_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("settings.json");
        save_settings_to(&path, &Settings::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_rejects_negative_fee() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            kurtaxe_fee: -1.0,
            ..Settings::default()
        };
        assert!(matches!(
            save_settings_to(&path, &settings),
            Err(StayError::Settings(_))
        ));
        assert!(!path.exists());
    }
}
