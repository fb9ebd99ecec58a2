//! Startup load of the chat configuration.
//!
//! Reads the `[chat]` table of the configuration file into a
//! [`ChatConfig`] once, when the process starts.  After that the in-memory
//! value is authoritative and the file is only ever written (through a
//! [`super::DocumentStore`]).
//!
//! Missing pieces fall back to [`ChatConfig::default`]:
//!
//! - no file at all → defaults (a warning is logged by the caller, since
//!   saving will fail until the file exists),
//! - no `[chat]` table → defaults,
//! - a `[chat]` table missing some keys → defaults for those keys only.
//!
//! A file that exists but is malformed is an error: starting with defaults
//! and then saving them would overwrite the operator's real lists.

use std::path::{Path, PathBuf};

use chatcfg_core::ChatConfig;
use serde::Deserialize;
use thiserror::Error;

/// Error type for the startup load.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A file system I/O error other than "not found".
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed, or `[chat]` has the wrong shape.
    #[error("failed to parse config TOML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The slice of the whole application configuration this process cares
/// about.  Every other table is ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    chat: ChatConfig,
}

/// Outcome of [`load_chat_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedChatConfig {
    /// Read from the file.
    FromFile(ChatConfig),
    /// The file does not exist yet; defaults are used.
    Defaults(ChatConfig),
}

impl LoadedChatConfig {
    pub fn into_inner(self) -> ChatConfig {
        match self {
            Self::FromFile(cfg) | Self::Defaults(cfg) => cfg,
        }
    }
}

/// Loads the `[chat]` table from `path`.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Io`] for file-system errors other than "not
/// found", and [`ConfigLoadError::Parse`] if the TOML is malformed.
pub fn load_chat_config(path: &Path) -> Result<LoadedChatConfig, ConfigLoadError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let file: ConfigFile =
                toml::from_str(&content).map_err(|source| ConfigLoadError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(LoadedChatConfig::FromFile(file.chat))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(LoadedChatConfig::Defaults(ChatConfig::default()))
        }
        Err(source) => Err(ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
