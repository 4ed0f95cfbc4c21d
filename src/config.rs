use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::labels::{DEFAULT_LABELS, LabelSet};

/// Startup settings read from `settings.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Label enumeration, in class index order
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Directory annotation files are written to; next to each image when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|l| l.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// On Linux: ~/.config/boxlabel/settings.yaml
    pub fn settings_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("boxlabel").join("settings.yaml")
    }

    /// Load settings, falling back to defaults when the file is missing or broken
    pub fn load(custom_path: Option<&Path>) -> Self {
        let path = match custom_path {
            Some(p) => {
                info!("Using custom settings path: {}", p.display());
                p.to_path_buf()
            }
            None => Self::settings_path(),
        };

        if !path.exists() {
            debug!("Settings file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("{:#}", e);
                warn!("Using default settings");
                Self::default()
            }
        }
    }

    /// Strict variant of [`Settings::load`] that reports every failure
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file at {:?}", path))?;
        let settings = serde_yaml::from_str::<Settings>(&contents)
            .with_context(|| format!("Failed to parse settings file at {:?}", path))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Label set from the configured labels; an empty list falls back to the defaults
    pub fn label_set(&self) -> LabelSet {
        LabelSet::new(self.labels.iter().cloned()).unwrap_or_else(|e| {
            warn!("{}, using default labels", e);
            LabelSet::default()
        })
    }
}
