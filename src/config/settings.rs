//! Recommender settings
//!
//! Settings come from serde defaults, then an optional settings.json, then
//! `SWINGRECS_*` environment variables. Later sources win.

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `SWINGRECS_LIMIT=50`
pub const ENV_PREFIX: &str = "SWINGRECS";

/// Recommender configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Keep only the top N recommendations
    pub limit: Option<usize>,

    /// Drop recommendations scoring below this
    pub min_score: f64,

    /// Merge spellings that share a canonical key into one recommendation
    pub group_by_canonical_key: bool,

    /// Field delimiter for CSV input: one ASCII character, or "tab" / "\t"
    pub csv_delimiter: String,

    /// How many top recommendations to log after a run
    pub log_top: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            limit: None,
            min_score: 0.0,
            group_by_canonical_key: false,
            csv_delimiter: default_csv_delimiter(),
            log_top: default_log_top(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from a settings file and the environment.
    ///
    /// A missing file is only an error when `required` is set.
    pub fn load(settings_path: &Path, required: bool) -> Result<Self> {
        if required && !settings_path.exists() {
            bail!("Settings file {:?} does not exist", settings_path);
        }

        let config: RecommenderConfig = Config::builder()
            .add_source(
                File::from(settings_path)
                    .format(FileFormat::Json)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command line flags on top of loaded settings. Flags that were
    /// not given leave the setting alone.
    pub fn apply_overrides(
        &mut self,
        limit: Option<usize>,
        min_score: Option<f64>,
        group_by_canonical_key: bool,
    ) {
        if let Some(limit) = limit {
            self.limit = Some(limit);
        }
        if let Some(min_score) = min_score {
            self.min_score = min_score;
        }
        if group_by_canonical_key {
            self.group_by_canonical_key = true;
        }
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<()> {
        if !self.min_score.is_finite() {
            bail!("min_score must be a finite number, got {}", self.min_score);
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// The CSV delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.csv_delimiter.as_str() {
            "\\t" | "tab" => Ok(b'\t'),
            d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
            d => bail!("csv_delimiter must be a single ASCII character, got {:?}", d),
        }
    }

    /// Save configuration to a settings file
    pub fn save(&self, settings_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(settings_path, content).context("Failed to write settings file")?;
        Ok(())
    }
}

// Default value functions for serde

fn default_csv_delimiter() -> String {
    ",".to_string()
}

fn default_log_top() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // load() reads SWINGRECS_* vars, so tests that load must not overlap
    // with tests that set them
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    struct EnvVars(&'static [&'static str]);

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in self.0 {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = RecommenderConfig::default();
        assert_eq!(config.limit, None);
        assert_eq!(config.min_score, 0.0);
        assert!(!config.group_by_canonical_key);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert_eq!(config.log_top, 10);
    }

    #[test]
    fn test_load_partial_file() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"limit": 25, "group_by_canonical_key": true}"#).unwrap();

        let config = RecommenderConfig::load(&path, true).unwrap();
        assert_eq!(config.limit, Some(25));
        assert!(config.group_by_canonical_key);
        assert_eq!(config.csv_delimiter, ",");
    }

    #[test]
    fn test_save_then_load() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = RecommenderConfig {
            min_score: 1.5,
            csv_delimiter: "tab".into(),
            ..RecommenderConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = RecommenderConfig::load(&path, true).unwrap();
        assert_eq!(loaded.min_score, 1.5);
        assert_eq!(loaded.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_required_file_must_exist() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(RecommenderConfig::load(&path, true).is_err());
    }

    #[test]
    fn test_delimiter_forms() {
        for (raw, byte) in [(",", b','), (";", b';'), ("tab", b'\t'), ("\\t", b'\t')] {
            let config = RecommenderConfig {
                csv_delimiter: raw.into(),
                ..RecommenderConfig::default()
            };
            assert_eq!(config.delimiter_byte().unwrap(), byte, "{:?}", raw);
        }
    }

    #[test]
    fn test_bad_delimiter() {
        let config = RecommenderConfig {
            csv_delimiter: ";;".into(),
            ..RecommenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"limit": 25, "group_by_canonical_key": false, "min_score": 0.5}"#,
        )
        .unwrap();

        let _vars = EnvVars(&["SWINGRECS_LIMIT", "SWINGRECS_GROUP_BY_CANONICAL_KEY"]);
        std::env::set_var("SWINGRECS_LIMIT", "7");
        std::env::set_var("SWINGRECS_GROUP_BY_CANONICAL_KEY", "true");

        let config = RecommenderConfig::load(&path, true).unwrap();
        assert_eq!(config.limit, Some(7));
        assert!(config.group_by_canonical_key);
        assert_eq!(config.min_score, 0.5);
    }

    #[test]
    fn test_flags_override_file() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"limit": 25, "min_score": 0.5}"#).unwrap();

        let mut config = RecommenderConfig::load(&path, true).unwrap();
        config.apply_overrides(Some(3), None, true);

        assert_eq!(config.limit, Some(3));
        assert_eq!(config.min_score, 0.5);
        assert!(config.group_by_canonical_key);
    }

    #[test]
    fn test_absent_flags_keep_settings() {
        let mut config = RecommenderConfig {
            limit: Some(25),
            group_by_canonical_key: true,
            ..RecommenderConfig::default()
        };
        config.apply_overrides(None, Some(1.0), false);

        assert_eq!(config.limit, Some(25));
        assert_eq!(config.min_score, 1.0);
        assert!(config.group_by_canonical_key);
    }
}
