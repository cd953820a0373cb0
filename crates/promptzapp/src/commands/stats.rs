use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::store::DataStore;
use serde::Serialize;
use std::collections::HashSet;

/// Collection totals for the status view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub prompts: usize,
    pub categories: usize,
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;
    let categories = filter::categories(&prompts, &HashSet::new()).len();

    let mut result = CmdResult::default();
    result.stats = Some(StoreStats {
        prompts: prompts.len(),
        categories,
    });
    Ok(result)
}
