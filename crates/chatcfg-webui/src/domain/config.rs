//! WebUI runtime settings.
//!
//! [`WebUiConfig`] is the single source of truth for where the WebUI listens
//! and which configuration file it edits.  It is built once in `main.rs` from
//! CLI arguments (or environment variables) and never read from global state.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listening port of the WebUI.
pub const DEFAULT_PORT: u16 = 8096;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// All runtime configuration for the WebUI process.
///
/// # Example
///
/// ```rust
/// use chatcfg_webui::domain::WebUiConfig;
///
/// let cfg = WebUiConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUiConfig {
    /// Address the HTTP server binds to.  `0.0.0.0` accepts connections on
    /// every interface; there is no authentication, so prefer `127.0.0.1`
    /// outside trusted networks.
    pub bind_addr: SocketAddr,

    /// The TOML document whose `[chat]` table is edited in place.
    pub config_path: PathBuf,
}

impl Default for WebUiConfig {
    /// | Field        | Default        |
    /// |--------------|----------------|
    /// | bind_addr    | `0.0.0.0:8096` |
    /// | config_path  | `config.toml`  |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
