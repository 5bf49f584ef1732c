//! Host Configuration
//!
//! Window limits and resize thresholds. Defaults match `tauri.conf.json`;
//! an optional `config.json` in the app config dir can override them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Axis, AxisLimits};

/// File name of the optional override inside the app config dir
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    /// Width changes of this many pixels or fewer are ignored
    pub width_threshold: u32,
    /// Height changes of this many pixels or fewer are ignored
    pub height_threshold: u32,
    /// Requested dimensions above this are dropped as invalid
    pub max_accepted_dimension: u32,
    /// Position file, relative to the user's home directory
    pub position_file_name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            max_width: 500,
            min_height: 120,
            max_height: 800,
            width_threshold: 1,
            height_threshold: 10,
            max_accepted_dimension: 2000,
            position_file_name: ".todo-app-position.json".to_string(),
        }
    }
}

impl HostConfig {
    /// Load overrides from `path`. Missing or unreadable files yield defaults.
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<HostConfig>(&data) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config.normalized()
            }
            Err(e) => {
                log::warn!("Invalid config {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Swap inverted bounds so every band is non-empty
    pub fn normalized(mut self) -> Self {
        if self.min_width > self.max_width {
            std::mem::swap(&mut self.min_width, &mut self.max_width);
        }
        if self.min_height > self.max_height {
            std::mem::swap(&mut self.min_height, &mut self.max_height);
        }
        self
    }

    pub fn limits(&self, axis: Axis) -> AxisLimits {
        match axis {
            Axis::Width => AxisLimits {
                min: self.min_width,
                max: self.max_width,
                threshold: self.width_threshold,
                max_accepted: self.max_accepted_dimension,
            },
            Axis::Height => AxisLimits {
                min: self.min_height,
                max: self.max_height,
                threshold: self.height_threshold,
                max_accepted: self.max_accepted_dimension,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load(&dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"maxWidth": 640, "heightThreshold": 4}"#).unwrap();

        let config = HostConfig::load(&path);
        assert_eq!(config.max_width, 640);
        assert_eq!(config.height_threshold, 4);
        assert_eq!(config.min_width, 200);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(HostConfig::load(&path), HostConfig::default());
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let config = HostConfig { min_width: 600, max_width: 300, ..Default::default() }.normalized();
        let limits = config.limits(Axis::Width);
        assert_eq!((limits.min, limits.max), (300, 600));
    }
}
