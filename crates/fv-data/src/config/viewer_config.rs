//! Viewer configuration file

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use fv_core::{NavigatorConfig, DEFAULT_SWIPE_THRESHOLD};
use crate::{FeedError, Result};

/// Settings for the feed viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Drag distance a gesture must exceed to turn the page
    pub swipe_threshold: f32,

    /// Fixed page height; the viewport height is used when unset
    pub page_extent: Option<f32>,

    /// Start playing the first item once the feed is loaded
    pub autoplay_first: bool,

    /// Feed listing to open on startup
    pub feed_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD as f32,
            page_extent: None,
            autoplay_first: true,
            feed_path: None,
        }
    }
}

impl ViewerConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ViewerConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.display(), "loaded viewer configuration");
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults if it is missing
    /// or unusable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring viewer configuration");
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(FeedError::InvalidConfig(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        if let Some(extent) = self.page_extent {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(FeedError::InvalidConfig(format!(
                    "page_extent must be positive, got {}",
                    extent
                )));
            }
        }
        Ok(())
    }

    /// Navigator tunables derived from this configuration
    pub fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            swipe_threshold: self.swipe_threshold.round().min(u32::MAX as f32) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.navigator_config(), NavigatorConfig::default());
        assert!(config.autoplay_first);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"page_extent": 640}"#).unwrap();
        assert_eq!(config.page_extent, Some(640.0));
        assert_eq!(config.swipe_threshold, 20.0);
        assert!(config.autoplay_first);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let negative = ViewerConfig { swipe_threshold: -1.0, ..Default::default() };
        assert!(matches!(negative.validate(), Err(FeedError::InvalidConfig(_))));

        let zero_extent = ViewerConfig { page_extent: Some(0.0), ..Default::default() };
        assert!(matches!(zero_extent.validate(), Err(FeedError::InvalidConfig(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedview.json");
        let config = ViewerConfig {
            swipe_threshold: 32.0,
            page_extent: Some(720.0),
            autoplay_first: false,
            feed_path: Some(PathBuf::from("feed.json")),
        };
        config.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.navigator_config().swipe_threshold, 32);
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedview.json");
        std::fs::write(&path, r#"{"swipe_threshold": -5}"#).unwrap();
        assert_eq!(ViewerConfig::load_or_default(&path), ViewerConfig::default());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ViewerConfig::load_or_default(&path), ViewerConfig::default());
    }
}
