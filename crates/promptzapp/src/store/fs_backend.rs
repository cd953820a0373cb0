use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Prompt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const STORE_FILE: &str = "prompts.json";

/// Filesystem backend persisting the collection as `prompts.json` in the
/// data directory.
pub struct FsBackend {
    dir: PathBuf,
}

// On-disk shape: a single `prompts` key holding the collection.
#[derive(Serialize)]
struct StoreFileRef<'a> {
    prompts: &'a [Prompt],
}

#[derive(Deserialize, Default)]
struct StoreFile {
    #[serde(default)]
    prompts: Vec<Prompt>,
}

impl FsBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }
}

impl StorageBackend for FsBackend {
    fn load_collection(&self) -> Result<Vec<Prompt>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        let file: StoreFile = serde_json::from_str(&raw)?;
        Ok(file.prompts)
    }

    fn save_collection(&self, prompts: &[Prompt]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(&StoreFileRef { prompts })?;
        let tmp = self.dir.join(format!("{}.tmp", STORE_FILE));
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.store_path())?;
        Ok(())
    }
}
