use super::fs_backend::FsBackend;
use super::prompt_store::PromptStore;
use std::path::PathBuf;

pub type FileStore = PromptStore<FsBackend>;

impl FileStore {
    /// Opens (or lazily creates) the store in the given data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        PromptStore::with_backend(FsBackend::new(dir))
    }
}
