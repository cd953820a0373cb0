use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::store::DataStore;
use std::collections::HashSet;

/// Distinct kinds across the collection, sorted.
pub fn kinds<S: DataStore>(store: &S) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;
    let mut result = CmdResult::default();
    result.facets = filter::kinds(&prompts);
    Ok(result)
}

/// Distinct categories of prompts surviving the kind selection, sorted.
pub fn categories<S: DataStore>(
    store: &S,
    selected_kinds: &HashSet<String>,
) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;
    let mut result = CmdResult::default();
    result.facets = filter::categories(&prompts, selected_kinds);
    Ok(result)
}
