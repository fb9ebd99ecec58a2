//! ConfigStore: validate, apply and persist edits to the chat configuration.
//!
//! The store is the only code allowed to mutate the live [`ChatConfig`].  It
//! is handed a shared handle to that config at construction (the process
//! created it at startup) plus a [`DocumentStore`] to persist into.
//!
//! # One request, one critical section
//!
//! ```text
//! apply_update(field, value)
//!   ├─ lock writer                     (one edit at a time)
//!   ├─ parse_update(field, value)      ← rejects without touching anything
//!   ├─ config.write() → apply          (single assignment)
//!   ├─ snapshot = config.read().clone()
//!   ├─ documents.load()                (fresh read, never cached)
//!   ├─ merge_chat_section(snapshot)
//!   ├─ documents.commit()              (atomic replace)
//!   └─ unlock writer
//! ```
//!
//! Holding the writer lock across the whole sequence means two concurrent
//! edits cannot interleave their read-modify-write of the file, and the file
//! always ends up holding the same values as memory after the last one.
//!
//! Readers ([`ConfigStore::get_snapshot`]) never take the writer lock.  They
//! clone the config under the `RwLock` read guard, and every mutation is a
//! single assignment under the write guard, so a snapshot can never mix
//! fields from two different edits.
//!
//! # Persist failures are not rolled back
//!
//! If the edit is valid but the file cannot be written, the in-memory change
//! **stays applied** and [`StoreError::Persist`] is returned.  The running
//! process keeps using the new lists while the file still holds the old
//! ones, until a later save succeeds.  The caller reports this as a server
//! error so the operator knows to retry.

use std::sync::Arc;

use chatcfg_core::{parse_update, ChatConfig, FieldUpdate, UpdateError};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::infrastructure::storage::{document::merge_chat_section, DocumentStore, PersistError};

/// Shared handle to the process-wide chat configuration.
pub type SharedChatConfig = Arc<RwLock<ChatConfig>>;

/// Error type for a combined update + persist.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The edit was rejected; nothing changed.
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// The edit was applied in memory but could not be saved.
    #[error("configuration updated in memory but not saved: {0}")]
    Persist(#[from] PersistError),
}

/// Result of a successful [`ConfigStore::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Human-readable description of the change.
    pub message: String,
    /// Snapshot taken after the save.
    pub config: ChatConfig,
}

/// Validates, applies and persists edits to the live chat configuration.
pub struct ConfigStore {
    config: SharedChatConfig,
    documents: Arc<dyn DocumentStore>,
    /// Serializes update + persist sequences.
    writer: Mutex<()>,
}

impl ConfigStore {
    pub fn new(config: SharedChatConfig, documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            config,
            documents,
            writer: Mutex::new(()),
        }
    }

    /// Returns the current values of the four managed fields.
    pub async fn get_snapshot(&self) -> ChatConfig {
        self.config.read().await.clone()
    }

    /// Validates and applies one field edit, without saving.
    ///
    /// # Errors
    ///
    /// Returns an [`UpdateError`] if the edit is rejected; the configuration
    /// is unchanged in that case.
    pub async fn update_field(&self, field: &str, raw: &Value) -> Result<(), UpdateError> {
        let _guard = self.writer.lock().await;
        self.apply_in_memory(field, raw).await.map(|_| ())
    }

    /// Writes the current four fields into the configuration document.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] if the document cannot be read, parsed or
    /// written.  The previous document is left intact.
    pub async fn persist(&self) -> Result<(), PersistError> {
        let _guard = self.writer.lock().await;
        self.persist_locked().await
    }

    /// Validates, applies and persists one edit as a single critical section.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Update`] – the edit was rejected, nothing changed.
    /// - [`StoreError::Persist`] – the edit **is applied in memory** but the
    ///   document was not updated (see the module docs).
    pub async fn apply_update(&self, field: &str, raw: &Value) -> Result<UpdateOutcome, StoreError> {
        let _guard = self.writer.lock().await;

        let update = self.apply_in_memory(field, raw).await?;
        let message = update.summary();
        self.persist_locked().await?;

        info!("[WebUI] {message}");
        Ok(UpdateOutcome {
            message,
            config: self.get_snapshot().await,
        })
    }

    /// Caller must hold `writer`.
    async fn apply_in_memory(&self, field: &str, raw: &Value) -> Result<FieldUpdate, UpdateError> {
        let update = parse_update(field, raw)?;
        self.config.write().await.apply(update.clone());
        Ok(update)
    }

    /// Caller must hold `writer`.
    async fn persist_locked(&self) -> Result<(), PersistError> {
        let snapshot = self.get_snapshot().await;
        let location = self.documents.location();

        let result = self.documents.load().and_then(|mut document| {
            merge_chat_section(&mut document, &snapshot)?;
            self.documents.commit(&document)
        });

        match &result {
            Ok(()) => info!("[WebUI] configuration saved to {}", location.display()),
            Err(e) => error!("[WebUI] failed to save configuration: {e}"),
        }
        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
