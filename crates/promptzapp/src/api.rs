//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all
//! promptz operations regardless of the UI in front of it.
//!
//! The facade dispatches to command functions and normalizes inputs. In
//! particular, user-facing 1-based positions (what a list view shows) are
//! resolved to stable prompt ids here, against one snapshot per call, so a
//! batch of positions cannot shift under itself.
//!
//! `PromptzApi<S: DataStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.
//!
//! No business logic lives here; that belongs in `commands/*`. No I/O or
//! presentation either; that belongs to the client.

use crate::commands::{self, helpers, CmdResult};
use crate::error::Result;
use crate::filter::PromptFilter;
use crate::model::{Prompt, PromptInput};
use crate::store::DataStore;
use std::collections::HashSet;
use std::path::Path;

/// The main API facade for promptz operations.
pub struct PromptzApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> PromptzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, input: PromptInput) -> Result<CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn list(&self, filter: &PromptFilter) -> Result<CmdResult> {
        commands::get::run(&self.store, filter)
    }

    /// The prompts at the given 1-based positions of the canonical order.
    pub fn view(&self, positions: &[usize]) -> Result<CmdResult> {
        let ids = helpers::resolve_positions(&self.store, positions)?;
        let mut result = CmdResult::default();
        for id in ids {
            result.listed_prompts.push(self.store.get_prompt(id)?);
        }
        Ok(result)
    }

    /// The single prompt at a 1-based position. Used by clients that merge
    /// current field values into an edit.
    pub fn prompt_at(&self, position: usize) -> Result<Prompt> {
        let ids = helpers::resolve_positions(&self.store, &[position])?;
        self.store.get_prompt(ids[0])
    }

    pub fn update(&mut self, position: usize, input: PromptInput) -> Result<CmdResult> {
        let ids = helpers::resolve_positions(&self.store, &[position])?;
        commands::update::run(&mut self.store, ids[0], input)
    }

    pub fn pin(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = helpers::resolve_positions(&self.store, positions)?;
        let mut combined = CmdResult::default();
        for id in ids {
            let result = commands::pinning::pin(&mut self.store, id)?;
            combined.messages.extend(result.messages);
            combined.affected_prompts.extend(result.affected_prompts);
        }
        Ok(combined)
    }

    pub fn delete(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = helpers::resolve_positions(&self.store, positions)?;
        let mut combined = CmdResult::default();
        for id in ids {
            let result = commands::delete::run(&mut self.store, id)?;
            combined.messages.extend(result.messages);
            combined.affected_prompts.extend(result.affected_prompts);
        }
        Ok(combined)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::delete::clear(&mut self.store)
    }

    pub fn remove_matching(
        &mut self,
        kind: Option<&str>,
        category: Option<&str>,
    ) -> Result<CmdResult> {
        commands::delete::remove_matching(&mut self.store, kind, category)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run_file(&mut self.store, path)
    }

    pub fn import_text(&mut self, text: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, text)
    }

    pub fn export(&self, out_dir: &Path, prefix: &str) -> Result<CmdResult> {
        commands::export::run(&self.store, out_dir, prefix)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn kinds(&self) -> Result<CmdResult> {
        commands::facets::kinds(&self.store)
    }

    pub fn categories(&self, selected_kinds: &HashSet<String>) -> Result<CmdResult> {
        commands::facets::categories(&self.store, selected_kinds)
    }
}

pub use crate::commands::stats::StoreStats;
pub use crate::commands::{CmdMessage, MessageLevel};
