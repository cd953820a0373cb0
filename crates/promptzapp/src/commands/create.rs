use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{self, PromptInput};
use crate::order;
use crate::store::DataStore;

/// Creates a prompt. Like any fresh save, the new prompt is pinned in front
/// of everything previously pinned.
pub fn run<S: DataStore>(store: &mut S, input: PromptInput) -> Result<CmdResult> {
    let mut prompts = store.load_prompts()?;

    let mut id = model::next_id();
    while prompts.iter().any(|p| p.id == id) {
        id += 1;
    }

    let pin_order = order::next_pin_order(&prompts);
    let prompt = input.build(id, Some(pin_order));
    prompts.push(prompt.clone());
    store.save_prompts(&prompts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt created: {}",
        prompt.title
    )));
    result.affected_prompts.push(prompt);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::sorted_prompts;
    use crate::model::UNTITLED;
    use crate::store::memory::InMemoryStore;

    fn input(title: &str) -> PromptInput {
        PromptInput {
            title: title.to_string(),
            content: "body".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_pins_the_new_prompt() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, input("First")).unwrap();

        assert_eq!(result.affected_prompts.len(), 1);
        let created = &result.affected_prompts[0];
        assert_eq!(created.pin_order, Some(-1));
        assert!(result.messages[0].content.contains("Prompt created: First"));
    }

    #[test]
    fn test_newest_creation_outranks_previous() {
        let mut store = InMemoryStore::new();
        run(&mut store, input("First")).unwrap();
        run(&mut store, input("Second")).unwrap();

        let listed = sorted_prompts(&store).unwrap();
        assert_eq!(listed[0].title, "Second");
        assert_eq!(listed[1].title, "First");
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = InMemoryStore::new();
        run(&mut store, input("A")).unwrap();
        run(&mut store, input("B")).unwrap();
        run(&mut store, input("C")).unwrap();

        let prompts = store.load_prompts().unwrap();
        let mut ids: Vec<i64> = prompts.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_create_defaults_empty_title() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, input("  ")).unwrap();
        assert_eq!(result.affected_prompts[0].title, UNTITLED);
    }
}
