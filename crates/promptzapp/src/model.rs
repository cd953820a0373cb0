//! # Domain Model: Prompts and Field Sanitization
//!
//! This module defines [`Prompt`], the single record type of the library, and
//! [`PromptInput`], the sanitized field bundle every write path goes through.
//!
//! ## Identity
//!
//! A prompt's `id` is assigned once, at creation, as the current Unix
//! timestamp in microseconds. Ids are immutable and double as a recency
//! signal: a larger id means a newer prompt, which is what the ordering
//! engine falls back to for unpinned prompts. Callers creating several
//! prompts in the same instant (CSV import) are responsible for keeping ids
//! unique by offsetting from the base timestamp.
//!
//! ## Sanitization
//!
//! Users paste text from anywhere: spreadsheet exports with BOM markers,
//! fields padded with whitespace, empty titles. Every field value is run
//! through [`sanitize`] on the way in, and an empty title becomes the
//! [`UNTITLED`] placeholder so lists never render blank rows.
//!
//! ## Pinning
//!
//! `pin_order` is absent for unpinned prompts. When present, the numeric
//! value defines pin rank: more negative sorts earlier. See [`crate::order`]
//! for the assignment rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title for prompts saved without one.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Primary facet. Serialized as `type`, the field's domain name.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Secondary facet, scoped under the selected kind(s) when filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
    /// Absent means unpinned. More negative means higher pin priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_order: Option<i64>,
}

impl Prompt {
    pub fn is_pinned(&self) -> bool {
        self.pin_order.is_some()
    }

    /// Creation time, recovered from the id.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.id)
    }
}

/// Raw field values for a prompt, prior to id assignment.
///
/// Both the CSV decoder and the create/update commands produce one of these;
/// [`PromptInput::build`] is the single place sanitization and defaulting
/// happen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptInput {
    pub title: String,
    pub kind: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl PromptInput {
    /// Builds a [`Prompt`], sanitizing every field. Empty kind/category
    /// become absent, empty tags are dropped, an empty title becomes
    /// [`UNTITLED`].
    pub fn build(self, id: i64, pin_order: Option<i64>) -> Prompt {
        let title = sanitize(&self.title);
        Prompt {
            id,
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
            kind: non_empty(sanitize(&self.kind)),
            category: non_empty(sanitize(&self.category)),
            tags: normalize_tags(self.tags),
            content: sanitize(&self.content),
            pin_order,
        }
    }
}

/// Strips a leading UTF-8 BOM and surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    text.trim_start_matches('\u{feff}').trim().to_string()
}

/// Trims tags and drops empty ones. Order is preserved, duplicates are
/// allowed.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| sanitize(&t))
        .filter(|t| !t.is_empty())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Next prompt id: the current Unix timestamp in microseconds.
pub fn next_id() -> i64 {
    Utc::now().timestamp_micros()
}
