use crate::error::{PromptzError, Result};
use crate::model::Prompt;
use crate::order;
use crate::store::DataStore;

/// The full collection in canonical display order.
///
/// Position resolution always goes through this, so `promptz pin 2` targets
/// the same prompt the user saw at position 2 in the last full listing.
pub fn sorted_prompts<S: DataStore>(store: &S) -> Result<Vec<Prompt>> {
    let mut prompts = store.load_prompts()?;
    order::sort(&mut prompts);
    Ok(prompts)
}

/// Resolves 1-based positions in the canonical order to prompt ids.
///
/// All positions are resolved against one snapshot, so a batch like
/// `delete 1 2` cannot shift under itself.
pub fn resolve_positions<S: DataStore>(store: &S, positions: &[usize]) -> Result<Vec<i64>> {
    let prompts = sorted_prompts(store)?;
    positions
        .iter()
        .map(|&pos| {
            if pos == 0 {
                return Err(PromptzError::Api("Positions start at 1".to_string()));
            }
            prompts
                .get(pos - 1)
                .map(|p| p.id)
                .ok_or_else(|| PromptzError::Api(format!("No prompt at position {}", pos)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_sorted_prompts_pins_first() {
        let fixture = StoreFixture::new()
            .with_prompt("Plain")
            .with_pinned_prompt("Pinned", -1);
        let prompts = sorted_prompts(&fixture.store).unwrap();
        assert_eq!(prompts[0].title, "Pinned");
        assert_eq!(prompts[1].title, "Plain");
    }

    #[test]
    fn test_resolve_positions() {
        let fixture = StoreFixture::new().with_prompt("A").with_prompt("B");
        let prompts = sorted_prompts(&fixture.store).unwrap();

        let ids = resolve_positions(&fixture.store, &[1, 2]).unwrap();
        assert_eq!(ids, vec![prompts[0].id, prompts[1].id]);
    }

    #[test]
    fn test_resolve_position_out_of_range() {
        let fixture = StoreFixture::new().with_prompt("A");
        assert!(resolve_positions(&fixture.store, &[5]).is_err());
        assert!(resolve_positions(&fixture.store, &[0]).is_err());
    }
}
