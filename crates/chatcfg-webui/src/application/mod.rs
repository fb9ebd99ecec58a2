//! Application layer for chatcfg-webui.
//!
//! Orchestrates an edit: validation (from `chatcfg-core`), the in-memory
//! mutation, and the save through a `DocumentStore`.  It does not know about
//! HTTP status codes or file paths.

pub mod config_store;

pub use config_store::{ConfigStore, SharedChatConfig, StoreError, UpdateOutcome};
