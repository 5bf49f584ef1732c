//! Window Position Repository
//!
//! Persists the window's screen position as a single JSON object.
//! The record is overwritten wholesale on every save.

use std::path::{Path, PathBuf};

use crate::domain::{HostResult, WindowPosition};

pub struct PositionRepository {
    path: PathBuf,
}

impl PositionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved position.
    ///
    /// A missing, empty or malformed file means "no saved position".
    pub fn load(&self) -> Option<WindowPosition> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Failed to read window position {}: {}", self.path.display(), e);
                return None;
            }
        };

        if data.trim().is_empty() {
            log::info!("Position file is empty");
            return None;
        }

        match serde_json::from_str::<WindowPosition>(&data) {
            Ok(position) => {
                log::info!("Loaded window position: ({}, {})", position.x, position.y);
                Some(position)
            }
            Err(e) => {
                log::warn!("Failed to parse window position: {}", e);
                None
            }
        }
    }

    /// Overwrite the saved position (temp file + rename)
    pub fn save(&self, position: &WindowPosition) -> HostResult<()> {
        let bytes = serde_json::to_vec(position)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file_name = self
            .path
            .file_name()
            .and_then(|v| v.to_str())
            .unwrap_or("position.json");
        let tmp_path = self.path.with_file_name(format!("{}.tmp", file_name));
        std::fs::write(&tmp_path, bytes)?;
        // Replaces the target in one step; the old record survives a failed write
        std::fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
