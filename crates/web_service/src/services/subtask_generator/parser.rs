//! Parsing of free-text model replies into subtask lists
//!
//! Models rarely answer with bare JSON. The reply is searched for the first
//! `[...]` span, stray control characters are removed from it, and only that
//! span is parsed as a JSON array of strings. Everything here is pure so it
//! can be exercised without a network.

use focus_core::GeneratedItem;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// First bracketed span, shortest match, allowed to cross line breaks
static LIST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[(.*?)\]").expect("list pattern is a valid regex"));

/// Tab, LF, CR, FF, backspace, VT, NUL and DEL
pub const CONTROL_CHARACTERS: [char; 8] = [
    '\t', '\n', '\r', '\u{0C}', '\u{08}', '\u{0B}', '\0', '\u{7F}',
];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No valid list found in the response: {content}")]
    NoList { content: String },

    #[error("The model response could not be converted to a list: {content}. Details: {source}")]
    InvalidList {
        content: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Inner text of the first `[...]` span, without the brackets
pub fn extract_list(content: &str) -> Option<&str> {
    LIST_PATTERN
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

pub fn strip_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !CONTROL_CHARACTERS.contains(c))
        .collect()
}

/// Subtask titles found in a model reply, in order
pub fn parse_subtasks(content: &str) -> Result<Vec<String>, ParseError> {
    let inner = extract_list(content).ok_or_else(|| ParseError::NoList {
        content: content.to_string(),
    })?;

    let cleaned = strip_control_characters(inner);
    serde_json::from_str::<Vec<String>>(&format!("[{cleaned}]")).map_err(|source| {
        ParseError::InvalidList {
            content: content.to_string(),
            source,
        }
    })
}

/// Parse a model reply and wrap every title into a fresh, open item
pub fn parse_items(content: &str) -> Result<Vec<GeneratedItem>, ParseError> {
    Ok(parse_subtasks(content)?
        .into_iter()
        .map(GeneratedItem::new)
        .collect())
}
