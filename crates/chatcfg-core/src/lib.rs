//! # chatcfg-core
//!
//! Shared library for the chat configuration WebUI containing the chat
//! allow/deny list model and the validation rules for editing it.
//!
//! This crate has zero dependencies on the file system, the HTTP stack, or
//! the async runtime.  Everything here is plain data plus pure functions,
//! which keeps the rules easy to test in isolation.
//!
//! # Overview (for beginners)
//!
//! The running application decides which chats it answers based on two
//! *scope lists*:
//!
//! - **group** – group chat identifiers, paired with a whitelist/blacklist mode.
//! - **private** – private chat (user) identifiers, paired with its own mode.
//!
//! The WebUI lets an operator edit those four values while the application is
//! running.  Edits arrive as loosely-typed JSON (`{"field": ..., "value": ...}`),
//! so this crate defines:
//!
//! - **`domain::chat`** – the typed configuration ([`ChatConfig`]) and the
//!   closed set of editable fields ([`ChatField`]).
//!
//! - **`domain::update`** – turning a raw field name + JSON value into a
//!   validated [`FieldUpdate`], or an [`UpdateError`] explaining why not.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `chatcfg_core::ChatConfig` instead of `chatcfg_core::domain::chat::ChatConfig`.
pub use domain::chat::{ChatConfig, ChatField, ListType, Scope};
pub use domain::update::{parse_update, FieldUpdate, UpdateError};
