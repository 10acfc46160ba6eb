//! Path management for swingrecs

use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

/// Filesystem locations used by the CLI
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths, using the platform config directory unless overridden
    pub fn new(config_override: Option<PathBuf>) -> Self {
        let config_dir = config_override.unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "swingrecs")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        });

        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}
