use crate::error::Result;
use crate::model::Prompt;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `PromptStore` handles the "what" (collection semantics).
pub trait StorageBackend {
    /// Load the full prompt collection.
    /// A missing store yields an empty collection, not an error.
    fn load_collection(&self) -> Result<Vec<Prompt>>;

    /// Persist the full prompt collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_collection(&self, prompts: &[Prompt]) -> Result<()>;
}
