use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptzError, Result};
use crate::order;
use crate::store::DataStore;

/// Pins a prompt to the front of the display order.
///
/// A fresh pin always takes a value strictly below every existing pin, so
/// the most recently pinned prompt outranks all previously pinned ones.
/// Pinning is one-directional: there is no unpin.
pub fn pin<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut prompts = store.load_prompts()?;
    let pin_order = order::next_pin_order(&prompts);

    let pinned = {
        let slot = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PromptzError::PromptNotFound(id))?;
        slot.pin_order = Some(pin_order);
        slot.clone()
    };
    store.save_prompts(&prompts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Pinned: {}", pinned.title)));
    result.affected_prompts.push(pinned);
    Ok(result)
}
