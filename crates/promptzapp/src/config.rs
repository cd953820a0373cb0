//! # Configuration
//!
//! Loaded from `promptz.toml` in the data directory, with compiled defaults
//! for anything not set. A missing file is not an error.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `preview_length` | `80` | Characters of content shown in list previews |
//! | `export_prefix` | `one_prompts` | Filename prefix for CSV exports |

use crate::error::{PromptzError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "promptz.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptzConfig {
    /// Characters of prompt content shown in list previews.
    #[config(default = 80)]
    pub preview_length: usize,

    /// Filename prefix for CSV exports (`{prefix}_{date}.csv`).
    #[config(default = "one_prompts")]
    pub export_prefix: String,
}

impl Default for PromptzConfig {
    fn default() -> Self {
        Self {
            preview_length: 80,
            export_prefix: "one_prompts".to_string(),
        }
    }
}

impl PromptzConfig {
    /// Loads configuration from `promptz.toml` in the given directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| PromptzError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PromptzConfig::default();
        assert_eq!(config.preview_length, 80);
        assert_eq!(config.export_prefix, "one_prompts");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PromptzConfig::load(dir.path()).unwrap();
        assert_eq!(config, PromptzConfig::default());
    }

    #[test]
    fn test_load_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "preview_length = 40\nexport_prefix = \"library\"\n",
        )
        .unwrap();

        let config = PromptzConfig::load(dir.path()).unwrap();
        assert_eq!(config.preview_length, 40);
        assert_eq!(config.export_prefix, "library");
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "preview_length = 40\n").unwrap();

        let config = PromptzConfig::load(dir.path()).unwrap();
        assert_eq!(config.preview_length, 40);
        assert_eq!(config.export_prefix, "one_prompts");
    }
}
