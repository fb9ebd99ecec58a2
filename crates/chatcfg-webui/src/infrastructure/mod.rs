//! Infrastructure layer for chatcfg-webui.
//!
//! Everything that touches the outside world lives here:
//!
//! - **`storage`**     – reading and atomically rewriting the TOML document.
//! - **`http_server`** – the axum router, handlers and serve loop.
//!
//! Validation rules and the read-modify-persist sequence belong to the
//! application layer; this layer only moves bytes.

pub mod http_server;
pub mod storage;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http_server::{build_router, run_server};
pub use storage::toml_file::TomlFileStore;
