//! Domain layer for chatcfg-webui.
//!
//! Pure types with no I/O: the process settings and the JSON bodies the
//! browser exchanges with the API.  Nothing here touches `tokio`, sockets,
//! or the file system.

pub mod config;
pub mod messages;

pub use config::WebUiConfig;
pub use messages::{ErrorResponse, RequestError, UpdateRequest, UpdateResponse};
