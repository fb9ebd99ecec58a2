//! chatcfg-webui library crate.
//!
//! A small web editor for the chat allow/deny lists of a running
//! application.  The browser page and JSON API edit the live configuration
//! and save it back to the TOML file without disturbing anything else in it.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (HTML page + JSON over HTTP)
//!         ↕
//! [chatcfg-webui]
//!   ├── domain/           Pure types: WebUiConfig, request/response bodies
//!   ├── application/      ConfigStore: validate → apply → persist
//!   └── infrastructure/
//!         ├── http_server/ axum routes, handlers, serve loop
//!         └── storage/     TOML document load/merge/atomic commit
//!         ↕
//! config.toml  ([chat] table + everything else, comments included)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain`, `chatcfg-core`, and the
//!   `DocumentStore` trait, never on a concrete file or socket.
//! - `infrastructure` depends on all other layers plus `axum` and `toml_edit`.

/// Domain layer: pure types (no I/O).
pub mod domain;

/// Application layer: the configuration store.
pub mod application;

/// Infrastructure layer: HTTP server and configuration file storage.
pub mod infrastructure;
