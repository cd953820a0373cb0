use super::mem_backend::MemBackend;
use super::prompt_store::PromptStore;

pub type InMemoryStore = PromptStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        PromptStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Prompt, PromptInput};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1_000,
            }
        }

        fn push(&mut self, prompt: Prompt) {
            let mut prompts = self.store.load_prompts().unwrap();
            prompts.push(prompt);
            self.store.save_prompts(&prompts).unwrap();
        }

        fn take_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }

        pub fn with_prompt(mut self, title: &str) -> Self {
            let id = self.take_id();
            let prompt = PromptInput {
                title: title.to_string(),
                content: "Some content".to_string(),
                ..Default::default()
            }
            .build(id, None);
            self.push(prompt);
            self
        }

        pub fn with_pinned_prompt(mut self, title: &str, pin_order: i64) -> Self {
            let id = self.take_id();
            let prompt = PromptInput {
                title: title.to_string(),
                content: "Pinned content".to_string(),
                ..Default::default()
            }
            .build(id, Some(pin_order));
            self.push(prompt);
            self
        }

        pub fn with_prompts(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.take_id();
                let prompt = PromptInput {
                    title: format!("Test Prompt {}", i + 1),
                    content: format!("Content for prompt {}", i + 1),
                    ..Default::default()
                }
                .build(id, None);
                self.push(prompt);
            }
            self
        }
    }
}
