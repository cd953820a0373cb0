//! # CSV Codec
//!
//! Converts between the prompt collection and its textual CSV form, the
//! interchange format users move prompt libraries around with.
//!
//! ## Format
//!
//! Five fixed columns: `title,type,category,tags,content`. Tags are joined
//! with `|` inside their column. The first row of any input is treated as a
//! header and discarded without validation, so files with localized headers
//! import just as well.
//!
//! ## Decoding
//!
//! [`parse`] tokenizes character by character with a quote-aware state
//! machine rather than splitting on lines, because content fields routinely
//! contain commas and newlines. Rules, in the order they bite:
//!
//! - a `"` toggles quoted mode, unless doubled inside quotes, which decodes
//!   as one literal quote;
//! - `,` outside quotes ends a field, `\n`/`\r` outside quotes ends a record
//!   (`\r\n` counts once);
//! - blank lines are skipped, short rows (fewer than 2 fields) are dropped
//!   silently, missing trailing fields default to empty;
//! - a final record without a trailing terminator is still emitted.
//!
//! A quote left open at end of input is a hard error: silently treating the
//! rest of the file as one field imports garbage that is painful to undo.
//!
//! ## Encoding
//!
//! [`serialize`] quotes a field only when it needs it (contains a comma,
//! quote, or line break), doubling interior quotes. Output is prefixed with
//! a BOM so spreadsheet tools pick the right encoding.

use crate::model::{self, Prompt, PromptInput};
use thiserror::Error;

/// Column names emitted on the first line of every export.
pub const HEADER: &str = "title,type,category,tags,content";

const BOM: char = '\u{feff}';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("unterminated quoted field starting at character {0}")]
    UnterminatedQuote(usize),
}

/// Decodes CSV text into sanitized prompt field bundles.
///
/// Empty input yields an empty vector. The header row is discarded
/// unconditionally.
pub fn parse(text: &str) -> Result<Vec<PromptInput>, CsvError> {
    let text = text.trim_start_matches(BOM).trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows: Vec<PromptInput> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_start = 0;
    let mut header_seen = false;

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '"' => {
                if in_quotes && next == Some('"') {
                    // Escaped quote: both source characters decode to one.
                    field.push('"');
                    i += 1;
                } else {
                    if !in_quotes {
                        quote_start = i;
                    }
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if c == '\r' && next == Some('\n') {
                    i += 1;
                }
                if fields.is_empty() && field.trim().is_empty() {
                    // Blank line: no record, not even an empty one.
                    field.clear();
                } else {
                    fields.push(std::mem::take(&mut field));
                    flush_row(&mut rows, &mut fields, &mut header_seen);
                }
            }
            _ => field.push(c),
        }
        i += 1;
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote(quote_start));
    }

    // Input without a trailing terminator still owes us its last record.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        flush_row(&mut rows, &mut fields, &mut header_seen);
    }

    Ok(rows)
}

fn flush_row(rows: &mut Vec<PromptInput>, fields: &mut Vec<String>, header_seen: &mut bool) {
    let row = std::mem::take(fields);
    if !*header_seen {
        *header_seen = true;
        return;
    }
    if row.len() < 2 {
        return;
    }
    let get = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
    rows.push(PromptInput {
        title: model::sanitize(get(0)),
        kind: model::sanitize(get(1)),
        category: model::sanitize(get(2)),
        tags: split_tags(get(3)),
        content: model::sanitize(get(4)),
    });
}

fn split_tags(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(model::sanitize)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Encodes the collection as BOM-prefixed CSV text.
pub fn serialize(prompts: &[Prompt]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for prompt in prompts {
        let row = [
            escape(&prompt.title),
            escape(prompt.kind.as_deref().unwrap_or("")),
            escape(prompt.category.as_deref().unwrap_or("")),
            escape(&prompt.tags.join("|")),
            escape(&prompt.content),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quotes a field only when its content requires it.
fn escape(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNTITLED;

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert_eq!(parse("").unwrap(), Vec::new());
        assert_eq!(parse("   \n  ").unwrap(), Vec::new());
        assert_eq!(parse("\u{feff}").unwrap(), Vec::new());
    }

    #[test]
    fn test_header_row_is_skipped() {
        let rows = parse("h1,h2,h3,h4,h5\nA,B,C,x|y,Z\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[0].kind, "B");
        assert_eq!(rows[0].category, "C");
        assert_eq!(rows[0].tags, vec!["x", "y"]);
        assert_eq!(rows[0].content, "Z");
    }

    #[test]
    fn test_quoted_field_with_comma_and_escaped_quote() {
        let rows = parse("title,type,category,tags,content\n\"Hi, \"\"there\"\"\",T,C,,body\n")
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Hi, \"there\"");
        assert_eq!(rows[0].content, "body");
    }

    #[test]
    fn test_quoted_field_with_newline() {
        let rows = parse("h,h,h,h,h\n\"multi\nline\",T,C,,body\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "multi\nline");
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let text = "h1,h2,h3,h4,h5\nA,T,C,,one\nloner\nB,T,C,,two\nC,T,C,,three\nD,T,C,,four\n";
        let rows = parse(text).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.title != "loner"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = parse("h1,h2\n\n\nA,T\n\nB,T\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[1].title, "B");
    }

    #[test]
    fn test_final_row_without_terminator_is_emitted() {
        let rows = parse("h1,h2,h3,h4,h5\nA,T,C,,last").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "last");
    }

    #[test]
    fn test_crlf_terminators_count_once() {
        let rows = parse("h1,h2\r\nA,T\r\nB,U\r\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, "T");
        assert_eq!(rows[1].kind, "U");
    }

    #[test]
    fn test_missing_trailing_fields_default_to_empty() {
        let rows = parse("h1,h2\nA,T\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "");
        assert!(rows[0].tags.is_empty());
        assert_eq!(rows[0].content, "");
    }

    #[test]
    fn test_empty_title_gets_placeholder_on_build() {
        let rows = parse("h1,h2\n  ,T\n").unwrap();
        let prompt = rows[0].clone().build(1, None);
        assert_eq!(prompt.title, UNTITLED);
    }

    #[test]
    fn test_tags_are_trimmed_and_empty_tokens_dropped() {
        let rows = parse("h1,h2,h3,h4,h5\nA,T,C, x | |y ,Z\n").unwrap();
        assert_eq!(rows[0].tags, vec!["x", "y"]);
    }

    #[test]
    fn test_unterminated_quote_is_a_hard_error() {
        let err = parse("h1,h2\n\"open,T\nB,U\n").unwrap_err();
        assert!(matches!(err, CsvError::UnterminatedQuote(_)));
    }

    #[test]
    fn test_serialize_emits_bom_and_header() {
        let out = serialize(&[]);
        assert!(out.starts_with('\u{feff}'));
        assert!(out.contains(HEADER));
    }

    #[test]
    fn test_escape_quotes_only_when_needed() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_roundtrip_through_serialize_and_parse() {
        let prompts = vec![
            PromptInput {
                title: "Comma, in title".to_string(),
                kind: "work".to_string(),
                category: "coding".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
                content: "Line one\nline \"two\"".to_string(),
            }
            .build(1, None),
            PromptInput {
                title: "Plain".to_string(),
                content: "body".to_string(),
                ..Default::default()
            }
            .build(2, Some(-1)),
        ];

        let rows = parse(&serialize(&prompts)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Comma, in title");
        assert_eq!(rows[0].kind, "work");
        assert_eq!(rows[0].tags, vec!["a", "b"]);
        assert_eq!(rows[0].content, "Line one\nline \"two\"");
        assert_eq!(rows[1].title, "Plain");
        assert_eq!(rows[1].kind, "");
        assert!(rows[1].tags.is_empty());
    }
}
