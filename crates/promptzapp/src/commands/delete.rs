use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptzError, Result};
use crate::model::Prompt;
use crate::store::DataStore;

/// Deletes a single prompt by id.
pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut prompts = store.load_prompts()?;
    let index = prompts
        .iter()
        .position(|p| p.id == id)
        .ok_or(PromptzError::PromptNotFound(id))?;
    let removed = prompts.remove(index);
    store.save_prompts(&prompts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {}", removed.title)));
    result.affected_prompts.push(removed);
    Ok(result)
}

/// Empties the whole collection.
pub fn clear<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;
    let mut result = CmdResult::default();
    if prompts.is_empty() {
        result.add_message(CmdMessage::warning("No prompts to clear"));
        return Ok(result);
    }
    store.save_prompts(&[])?;
    result.add_message(CmdMessage::success(format!(
        "Cleared {} prompts",
        prompts.len()
    )));
    Ok(result)
}

/// Removes every prompt matching the selected facets. At least one facet
/// must be selected; a facet left unselected matches everything.
pub fn remove_matching<S: DataStore>(
    store: &mut S,
    kind: Option<&str>,
    category: Option<&str>,
) -> Result<CmdResult> {
    if kind.is_none() && category.is_none() {
        return Err(PromptzError::Api(
            "Select a type or category to remove".to_string(),
        ));
    }

    let prompts = store.load_prompts()?;
    let kept: Vec<Prompt> = prompts
        .iter()
        .filter(|p| {
            let matches_kind = kind.is_none() || p.kind.as_deref() == kind;
            let matches_category = category.is_none() || p.category.as_deref() == category;
            !(matches_kind && matches_category)
        })
        .cloned()
        .collect();

    let removed = prompts.len() - kept.len();
    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::warning("No prompts matched the selected facets"));
        return Ok(result);
    }

    store.save_prompts(&kept)?;
    result.add_message(CmdMessage::success(format!("Removed {} prompts", removed)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::PromptInput;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (title, kind, category) in [
            ("A", "work", "coding"),
            ("B", "work", "writing"),
            ("C", "life", "coding"),
        ] {
            create::run(
                &mut store,
                PromptInput {
                    title: title.to_string(),
                    kind: kind.to_string(),
                    category: category.to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn test_delete_removes_only_the_target() {
        let fixture = StoreFixture::new().with_prompt("Keep").with_prompt("Drop");
        let mut store = fixture.store;
        let id = store
            .load_prompts()
            .unwrap()
            .iter()
            .find(|p| p.title == "Drop")
            .unwrap()
            .id;

        let result = run(&mut store, id).unwrap();
        assert!(result.messages[0].content.contains("Deleted: Drop"));

        let remaining = store.load_prompts().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Keep");
    }

    #[test]
    fn test_delete_not_found_mutates_nothing() {
        let fixture = StoreFixture::new().with_prompt("Only");
        let mut store = fixture.store;

        let err = run(&mut store, 424242);
        assert!(matches!(err, Err(PromptzError::PromptNotFound(424242))));
        assert_eq!(store.load_prompts().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_empties_the_collection() {
        let fixture = StoreFixture::new().with_prompts(3);
        let mut store = fixture.store;

        let result = clear(&mut store).unwrap();
        assert!(result.messages[0].content.contains("Cleared 3 prompts"));
        assert!(store.load_prompts().unwrap().is_empty());
    }

    #[test]
    fn test_clear_on_empty_store_warns() {
        let mut store = InMemoryStore::new();
        let result = clear(&mut store).unwrap();
        assert!(result.messages[0].content.contains("No prompts to clear"));
    }

    #[test]
    fn test_remove_matching_needs_a_facet() {
        let mut store = seeded_store();
        assert!(remove_matching(&mut store, None, None).is_err());
    }

    #[test]
    fn test_remove_matching_by_kind() {
        let mut store = seeded_store();
        let result = remove_matching(&mut store, Some("work"), None).unwrap();
        assert!(result.messages[0].content.contains("Removed 2 prompts"));

        let remaining = store.load_prompts().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "C");
    }

    #[test]
    fn test_remove_matching_needs_both_facets_to_agree() {
        let mut store = seeded_store();
        let result = remove_matching(&mut store, Some("work"), Some("coding")).unwrap();
        assert!(result.messages[0].content.contains("Removed 1 prompts"));

        let remaining = store.load_prompts().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|p| p.title != "A"));
    }

    #[test]
    fn test_remove_matching_zero_matches_warns() {
        let mut store = seeded_store();
        let result = remove_matching(&mut store, Some("nonexistent"), None).unwrap();
        assert!(result.messages[0]
            .content
            .contains("No prompts matched the selected facets"));
        assert_eq!(store.load_prompts().unwrap().len(), 3);
    }
}
