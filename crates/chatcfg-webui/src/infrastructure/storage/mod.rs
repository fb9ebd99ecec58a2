//! Storage infrastructure: the on-disk configuration document.
//!
//! The application layer never opens files itself.  It talks to a
//! [`DocumentStore`], which hands out the current document as an editable
//! `toml_edit` tree and commits an edited tree back.
//!
//! # Why a tree and not a struct? (for beginners)
//!
//! `toml::from_str` into a `#[derive(Deserialize)]` struct throws away
//! comments, blank lines, key order, and every section the struct does not
//! know about.  Writing that struct back would silently delete the rest of
//! the application's configuration.  `toml_edit::DocumentMut` instead keeps
//! the file as a tree of tables, keys, values *and their surrounding text*,
//! so replacing four values under `[chat]` leaves everything else exactly as
//! it was.
//!
//! Sub-modules:
//!
//! - **`document`**    – merging the chat snapshot into a parsed tree.
//! - **`toml_file`**   – the production [`DocumentStore`], with atomic writes.
//! - **`config_file`** – loading the initial chat configuration at startup.
//! - **`mock`**        – an in-memory [`DocumentStore`] for tests.

use std::path::PathBuf;

use thiserror::Error;
use toml_edit::DocumentMut;

pub mod config_file;
pub mod document;
pub mod mock;
pub mod toml_file;

/// Error type for reading, editing and writing the configuration document.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The document could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// The `chat` key exists but holds something other than a table.
    #[error("`{key}` in the config document is not a table")]
    NotATable { key: String },

    /// The rewritten document could not be committed.  The previous file is
    /// left in place.
    #[error("failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source and sink of the configuration document.
///
/// Every call to [`DocumentStore::load`] must read the document fresh; the
/// store never caches it, so external edits made between two saves are
/// picked up by the next save.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Reads and parses the current document.
    fn load(&self) -> Result<DocumentMut, PersistError>;

    /// Replaces the stored document with `document`.  Either the whole new
    /// content is committed or the previous content is left untouched.
    fn commit(&self, document: &DocumentMut) -> Result<(), PersistError>;

    /// Where the document lives, for log messages.
    fn location(&self) -> PathBuf;
}
