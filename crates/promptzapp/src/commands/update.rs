use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptzError, Result};
use crate::model::PromptInput;
use crate::order;
use crate::store::DataStore;

/// Replaces a prompt's fields in place. The id is preserved; any edit-save
/// re-pins the prompt in front of the order, same as a fresh creation.
pub fn run<S: DataStore>(store: &mut S, id: i64, input: PromptInput) -> Result<CmdResult> {
    let mut prompts = store.load_prompts()?;
    let pin_order = order::next_pin_order(&prompts);

    let updated = {
        let slot = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PromptzError::PromptNotFound(id))?;
        *slot = input.build(id, Some(pin_order));
        slot.clone()
    };
    store.save_prompts(&prompts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt updated: {}",
        updated.title
    )));
    result.affected_prompts.push(updated);
    Ok(result)
}
