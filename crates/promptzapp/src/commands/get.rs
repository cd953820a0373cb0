use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, PromptFilter};
use crate::store::DataStore;

/// Lists the collection through a filter, in canonical display order.
pub fn run<S: DataStore>(store: &S, filter: &PromptFilter) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;
    let listed = filter::apply(&prompts, filter);
    Ok(CmdResult::default().with_listed_prompts(listed))
}
