//! Domain layer: the chat list configuration and its update rules.
//!
//! No I/O happens here.  Callers own the storage of a [`chat::ChatConfig`]
//! and feed raw edits through [`update::parse_update`] before applying them.

pub mod chat;
pub mod update;
