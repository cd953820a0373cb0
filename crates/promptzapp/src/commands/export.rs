use crate::commands::{CmdMessage, CmdResult};
use crate::csv;
use crate::error::Result;
use crate::store::DataStore;
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Exports the whole collection as a dated CSV file in `out_dir`.
///
/// The output is BOM-prefixed UTF-8 so spreadsheet tools open it cleanly.
/// An empty collection writes nothing.
pub fn run<S: DataStore>(store: &S, out_dir: &Path, prefix: &str) -> Result<CmdResult> {
    let prompts = store.load_prompts()?;

    let mut result = CmdResult::default();
    if prompts.is_empty() {
        result.add_message(CmdMessage::info("No prompts to export."));
        return Ok(result);
    }

    let filename = format!("{}_{}.csv", prefix, Utc::now().format("%Y-%m-%d"));
    let path = out_dir.join(filename);
    fs::write(&path, csv::serialize(&prompts))?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} prompts to {}",
        prompts.len(),
        path.display()
    )));
    Ok(result)
}
