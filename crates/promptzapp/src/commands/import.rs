use crate::commands::{CmdMessage, CmdResult};
use crate::csv;
use crate::error::Result;
use crate::model;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Imports prompts from CSV text, merging them into the store.
///
/// Each imported prompt gets a fresh id offset from one base timestamp, so a
/// whole batch created in the same instant stays unique. Imported prompts
/// land unpinned. Malformed input never fails the operation: it yields zero
/// imports and a user-visible notice.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let rows = match csv::parse(text) {
        Ok(rows) => rows,
        Err(err) => {
            result.add_message(CmdMessage::error(format!(
                "CSV file is empty or invalid: {}",
                err
            )));
            return Ok(result);
        }
    };
    if rows.is_empty() {
        result.add_message(CmdMessage::error("CSV file is empty or invalid"));
        return Ok(result);
    }

    let mut prompts = store.load_prompts()?;
    let count = rows.len();
    let mut next = model::next_id();
    for input in rows {
        while prompts.iter().any(|p| p.id == next) {
            next += 1;
        }
        prompts.push(input.build(next, None));
        next += 1;
    }
    store.save_prompts(&prompts)?;

    result.add_message(CmdMessage::success(format!("Imported {} prompts", count)));
    Ok(result)
}

/// Imports prompts from a CSV file on disk, read as UTF-8.
pub fn run_file<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )));
            return Ok(result);
        }
    };
    run(store, &text)
}
