//! Generator configuration. Loaded from meshgen.ron at startup.

use procgen::{GridParams, RoundedBoxParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to generate and where to put it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshgenConfig {
    #[serde(default)]
    pub grid: GridParams,
    #[serde(default)]
    pub rounded_box: RoundedBoxParams,
    /// Directory for the exported `.obj` files. Nothing is written when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Comma-separated `url,label` list to read and report.
    #[serde(default)]
    pub links_file: Option<PathBuf>,
    /// Upload both meshes through a headless wgpu device.
    #[serde(default)]
    pub upload_to_gpu: bool,
    /// Physics steps for the drop test of the box colliders. 0 skips it.
    #[serde(default = "default_settle_steps")]
    pub settle_steps: u32,
}

fn default_settle_steps() -> u32 {
    240
}

impl Default for MeshgenConfig {
    fn default() -> Self {
        Self {
            grid: GridParams::default(),
            rounded_box: RoundedBoxParams::default(),
            output_dir: None,
            links_file: None,
            upload_to_gpu: false,
            settle_steps: default_settle_steps(),
        }
    }
}

impl MeshgenConfig {
    /// Load config from `path`. If the file is missing or invalid, returns default config.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(_) => log::info!("No config at {:?}, using defaults", path),
        }
        Self::default()
    }
}

/// `meshgen.ron` in the current directory.
pub fn default_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("meshgen.ron")
}
