//! Subtask generation domain
//!
//! Turns a task into a short list of actionable subtasks with a hosted
//! language model:
//! - `prompt` builds the few-shot conversation
//! - `parser` pulls a string list out of the free-text reply
//! - `generator` runs invoke-and-parse under a bounded retry

pub mod generator;
pub mod parser;
pub mod prompt;
pub mod types;

pub use generator::SubtaskGenerator;
pub use parser::{parse_items, parse_subtasks, ParseError};
pub use types::*;
