//! In-memory document store for unit and integration testing.
//!
//! Holds the document as plain text so tests can seed arbitrary TOML,
//! inspect exactly what was committed, and simulate a failing disk without
//! touching the file system.

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use toml_edit::DocumentMut;

use super::{DocumentStore, PersistError};

/// A mock implementation of [`DocumentStore`] backed by a `String`.
pub struct InMemoryDocumentStore {
    text: Mutex<String>,
    commits: AtomicUsize,
    fail_commits: AtomicBool,
}

impl InMemoryDocumentStore {
    /// Creates a store whose document is `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            commits: AtomicUsize::new(0),
            fail_commits: AtomicBool::new(false),
        }
    }

    /// Current document text, as last committed (or seeded).
    pub fn text(&self) -> String {
        self.text.lock().expect("lock poisoned").clone()
    }

    /// Replaces the document text, as if edited by another program.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.lock().expect("lock poisoned") = text.into();
    }

    /// Number of successful commits so far.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// When `true`, every following commit fails with a write error and
    /// leaves the text unchanged.
    pub fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new("")
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn load(&self) -> Result<DocumentMut, PersistError> {
        self.text()
            .parse::<DocumentMut>()
            .map_err(|source| PersistError::Parse {
                path: self.location(),
                source,
            })
    }

    fn commit(&self, document: &DocumentMut) -> Result<(), PersistError> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(PersistError::Write {
                path: self.location(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "simulated write failure"),
            });
        }
        self.set_text(document.to_string());
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://config.toml")
    }
}
