//! focus_core - Core types and configuration for the Focus Flow service
//!
//! This crate provides the foundational types shared by the other crates:
//! - `task` - Task input and GeneratedItem output for subtask generation
//! - `config` - Process configuration (inference credentials, endpoints, bind address)

pub mod config;
pub mod task;

// Re-export commonly used types
pub use config::{Config, InferenceCredentials, PromptLanguage};
pub use task::{GeneratedItem, Task};
