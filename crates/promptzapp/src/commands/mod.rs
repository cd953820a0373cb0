//! # Command Layer
//!
//! The core business logic of promptz. Each command lives in its own
//! submodule and implements pure Rust functions over domain types:
//!
//! - Operate on `Prompt`, `PromptInput`, `PromptFilter`
//! - Return structured [`CmdResult`] values with affected prompts and
//!   leveled messages
//! - Are completely UI-agnostic: no stdout, no argument parsing, no exit
//!   codes, no user interaction
//!
//! Every command is a snapshot cycle against the [`crate::store::DataStore`]
//! trait: load the collection, compute the next collection, save it back.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! `InMemoryStore`, exercise the logic branches and edge cases, and verify
//! the `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a new prompt (assigns id, pins fresh)
//! - [`update`]: Edit an existing prompt (keeps id, re-pins)
//! - [`pinning`]: Pin a prompt to the front of the order
//! - [`get`]: List prompts through a filter
//! - [`delete`]: Delete one, clear all, or remove by facet
//! - [`import`]: CSV import
//! - [`export`]: CSV export
//! - [`stats`]: Collection totals
//! - [`facets`]: Kind / category enumeration
//! - [`helpers`]: Canonical ordering and position resolution

use crate::model::Prompt;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod export;
pub mod facets;
pub mod get;
pub mod helpers;
pub mod import;
pub mod pinning;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_prompts: Vec<Prompt>,
    pub listed_prompts: Vec<Prompt>,
    pub facets: Vec<String>,
    pub stats: Option<stats::StoreStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_prompts(mut self, prompts: Vec<Prompt>) -> Self {
        self.listed_prompts = prompts;
        self
    }

    pub fn with_affected_prompts(mut self, prompts: Vec<Prompt>) -> Self {
        self.affected_prompts = prompts;
        self
    }
}
