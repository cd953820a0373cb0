//! # Storage Layer
//!
//! The store holds one thing: the prompt collection, read and written as a
//! whole. Every mutating operation is a snapshot cycle: load the current
//! collection, compute the next one in memory, write it back. There is no
//! per-record locking and no optimistic-concurrency check: the last writer
//! wins over the entire collection, which is the accepted model for a
//! single-client store.
//!
//! ## Two layers
//!
//! - [`backend::StorageBackend`] handles the "how": raw collection I/O
//!   against the filesystem ([`fs_backend::FsBackend`]) or memory
//!   ([`mem_backend::MemBackend`], for tests).
//! - [`prompt_store::PromptStore`] handles the "what": collection semantics
//!   on top of a backend, including self-healing of duplicate ids on load
//!   (the collection is assumed potentially dirty and repaired lazily).
//!
//! Commands depend only on the [`DataStore`] trait, so every command is
//! testable against [`memory::InMemoryStore`] without touching disk.
//!
//! ## Storage layout
//!
//! ```text
//! <data dir>/
//! ├── prompts.json    # The collection: {"prompts": [...]}
//! └── promptz.toml    # Configuration (optional)
//! ```

use crate::error::Result;
use crate::model::Prompt;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod prompt_store;

/// Abstract interface for prompt storage.
pub trait DataStore {
    /// Load the full prompt collection.
    fn load_prompts(&self) -> Result<Vec<Prompt>>;

    /// Persist the full prompt collection.
    fn save_prompts(&mut self, prompts: &[Prompt]) -> Result<()>;

    /// Get a single prompt by id.
    fn get_prompt(&self, id: i64) -> Result<Prompt>;
}
