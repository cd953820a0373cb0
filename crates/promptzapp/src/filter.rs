//! # Filter Engine
//!
//! Narrow the collection by facet selection and free-text search, then hand
//! the survivors to the ordering engine. Filter state is an explicit value
//! threaded through calls; each view owns its own [`PromptFilter`].
//!
//! The final predicate is the AND of three parts:
//!
//! - **kind**: empty selection matches everything, otherwise the prompt's
//!   kind must be an exact member of the selected set;
//! - **category**: same rule on the secondary facet;
//! - **search**: the raw string is split on runs of whitespace and both
//!   ASCII and full-width commas; every term must be a case-insensitive
//!   substring of at least one of title, content, kind, category, or a tag.

use crate::model::Prompt;
use crate::order;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    pub kinds: HashSet<String>,
    pub categories: HashSet<String>,
    pub search: Option<String>,
}

impl PromptFilter {
    pub fn matches(&self, prompt: &Prompt) -> bool {
        let matches_kind = self.kinds.is_empty()
            || prompt.kind.as_deref().is_some_and(|k| self.kinds.contains(k));
        let matches_category = self.categories.is_empty()
            || prompt
                .category
                .as_deref()
                .is_some_and(|c| self.categories.contains(c));
        if !matches_kind || !matches_category {
            return false;
        }
        let Some(raw) = self.search.as_deref() else {
            return true;
        };
        split_terms(raw)
            .iter()
            .all(|term| contains_term(prompt, term))
    }
}

/// Splits a raw search string into lowercased terms. Separators are runs of
/// whitespace, `,`, and the full-width `，`.
pub fn split_terms(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',' || c == '，')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_term(prompt: &Prompt, term: &str) -> bool {
    prompt.title.to_lowercase().contains(term)
        || prompt.content.to_lowercase().contains(term)
        || prompt
            .kind
            .as_deref()
            .is_some_and(|k| k.to_lowercase().contains(term))
        || prompt
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(term))
        || prompt.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Filters and sorts: the display list for a given filter state.
pub fn apply(prompts: &[Prompt], filter: &PromptFilter) -> Vec<Prompt> {
    let mut matched: Vec<Prompt> = prompts
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    order::sort(&mut matched);
    matched
}

/// Distinct non-empty kinds, sorted ascending.
pub fn kinds(prompts: &[Prompt]) -> Vec<String> {
    let mut kinds: Vec<String> = prompts.iter().filter_map(|p| p.kind.clone()).collect();
    kinds.sort();
    kinds.dedup();
    kinds
}

/// Distinct categories of the prompts surviving the kind selection, sorted
/// ascending. An empty selection scopes to the whole collection.
pub fn categories(prompts: &[Prompt], selected_kinds: &HashSet<String>) -> Vec<String> {
    let mut categories: Vec<String> = prompts
        .iter()
        .filter(|p| {
            selected_kinds.is_empty()
                || p.kind.as_deref().is_some_and(|k| selected_kinds.contains(k))
        })
        .filter_map(|p| p.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
