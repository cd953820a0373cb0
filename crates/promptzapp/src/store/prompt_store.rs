use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{PromptzError, Result};
use crate::model::Prompt;

/// Collection semantics over a raw [`StorageBackend`].
///
/// The collection is assumed potentially dirty and repaired lazily: loading
/// self-heals duplicate ids (the later entry wins), restoring the id
/// uniqueness invariant without failing the read.
pub struct PromptStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PromptStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for PromptStore<B> {
    fn load_prompts(&self) -> Result<Vec<Prompt>> {
        Ok(dedupe_ids(self.backend.load_collection()?))
    }

    fn save_prompts(&mut self, prompts: &[Prompt]) -> Result<()> {
        self.backend.save_collection(prompts)
    }

    fn get_prompt(&self, id: i64) -> Result<Prompt> {
        self.load_prompts()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(PromptzError::PromptNotFound(id))
    }
}

/// Duplicate ids violate the collection invariant; the later entry wins.
fn dedupe_ids(prompts: Vec<Prompt>) -> Vec<Prompt> {
    let mut result: Vec<Prompt> = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        if let Some(existing) = result.iter_mut().find(|p| p.id == prompt.id) {
            *existing = prompt;
        } else {
            result.push(prompt);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PromptInput;
    use crate::store::backend::StorageBackend;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::InMemoryStore;

    fn prompt(id: i64, title: &str) -> Prompt {
        PromptInput {
            title: title.to_string(),
            ..Default::default()
        }
        .build(id, None)
    }

    #[test]
    fn test_get_prompt_not_found() {
        let store = InMemoryStore::new();
        match store.get_prompt(99) {
            Err(PromptzError::PromptNotFound(id)) => assert_eq!(id, 99),
            _ => panic!("Expected PromptNotFound"),
        }
    }

    #[test]
    fn test_save_then_get() {
        let mut store = InMemoryStore::new();
        store.save_prompts(&[prompt(1, "One")]).unwrap();
        let loaded = store.get_prompt(1).unwrap();
        assert_eq!(loaded.title, "One");
    }

    #[test]
    fn test_load_self_heals_duplicate_ids() {
        let backend = MemBackend::new();
        backend
            .save_collection(&[prompt(1, "Old"), prompt(2, "Other"), prompt(1, "New")])
            .unwrap();

        let store = PromptStore::with_backend(backend);
        let loaded = store.load_prompts().unwrap();
        assert_eq!(loaded.len(), 2);
        let one = loaded.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(one.title, "New");
    }

    #[test]
    fn test_write_error_surfaces_once() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        match store.save_prompts(&[prompt(1, "One")]) {
            Err(PromptzError::Store(_)) => {}
            _ => panic!("Expected Store error"),
        }
    }
}
