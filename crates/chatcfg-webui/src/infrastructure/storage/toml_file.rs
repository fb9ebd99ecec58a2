//! The production [`DocumentStore`]: a TOML file at a fixed path.
//!
//! # Atomic replacement
//!
//! Overwriting the file in place (`std::fs::write`) truncates it first, so a
//! crash or a full disk halfway through leaves a cut-off configuration.
//! [`TomlFileStore::commit`] instead:
//!
//! 1. resolves symlinks, so the file that is replaced is the real one,
//! 2. creates `.<name>.<uuid>.tmp` next to it with the same permissions,
//! 3. writes the new content and flushes it to disk (`sync_all`),
//! 4. renames it over the target.
//!
//! A rename within one directory is atomic on every supported platform, so
//! readers see either the old file or the new one.  On any failure the
//! temporary file is removed and the original is untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use toml_edit::DocumentMut;
use tracing::debug;
use uuid::Uuid;

use super::{DocumentStore, PersistError};

/// Reads and atomically rewrites one TOML file.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file a commit must replace.
    ///
    /// A symlinked config is written through: the link stays in place and
    /// its target receives the new content.  A path that does not exist yet
    /// is used as given.
    fn commit_target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Hidden sibling of `target` used for the not-yet-committed content.
    fn temp_path(target: &Path) -> PathBuf {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config.toml".to_string());
        let temp_name = format!(".{name}.{}.tmp", Uuid::new_v4().simple());
        match target.parent() {
            Some(dir) => dir.join(temp_name),
            None => PathBuf::from(temp_name),
        }
    }

    fn write_and_rename(target: &Path, temp: &Path, content: &str) -> std::io::Result<()> {
        let mut file = File::create(temp)?;

        // Take the target's mode (e.g. 0600) before any content is written.
        if let Ok(meta) = fs::metadata(target) {
            file.set_permissions(meta.permissions())?;
        }

        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(temp, target)
    }
}

impl DocumentStore for TomlFileStore {
    fn load(&self) -> Result<DocumentMut, PersistError> {
        let content = fs::read_to_string(&self.path).map_err(|source| PersistError::Read {
            path: self.path.clone(),
            source,
        })?;
        content
            .parse::<DocumentMut>()
            .map_err(|source| PersistError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    fn commit(&self, document: &DocumentMut) -> Result<(), PersistError> {
        let target = self.commit_target();
        let temp = Self::temp_path(&target);
        let content = document.to_string();

        if let Err(source) = Self::write_and_rename(&target, &temp, &content) {
            // Best effort: the temp file may not exist if `create` failed.
            let _ = fs::remove_file(&temp);
            return Err(PersistError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!("committed {} bytes to {}", content.len(), target.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
