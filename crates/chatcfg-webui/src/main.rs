//! Chat configuration WebUI: entry point.
//!
//! Serves a single-page editor and a small JSON API for the `[chat]` table
//! of an application's `config.toml`:
//!
//! - which list mode applies to group chats and to private chats
//!   (`whitelist` or `blacklist`), and
//! - the numeric group / user IDs on each list.
//!
//! Every accepted edit takes effect in memory immediately and is then written
//! back to the file.  Only the four `[chat]` keys are touched; comments, key
//! order and every other section are kept as they were.
//!
//! # Usage
//!
//! ```text
//! chatcfg-webui [OPTIONS]
//!
//! Options:
//!   --host   <HOST>   Address to bind the HTTP server to [default: 0.0.0.0]
//!   --port   <PORT>   HTTP port [default: 8096]
//!   --config <PATH>   Configuration file to edit [default: config.toml]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable              | Default       | Description                 |
//! |-----------------------|---------------|-----------------------------|
//! | `CHATCFG_WEBUI_HOST`  | `0.0.0.0`     | Bind address                |
//! | `CHATCFG_WEBUI_PORT`  | `8096`        | HTTP port                   |
//! | `CHATCFG_CONFIG_PATH` | `config.toml` | Configuration file to edit  |
//! | `RUST_LOG`            | `info`        | Log filter                  |
//!
//! # Architecture overview
//!
//! ```text
//! Browser  (HTML page, JSON over HTTP)
//!       ↕
//! chatcfg-webui  ← this process
//!   domain/          WebUiConfig, request/response bodies
//!   application/     ConfigStore (validate → apply → persist)
//!   infrastructure/
//!     http_server/   axum router and serve loop
//!     storage/       toml_edit document merge, atomic file replace
//!       ↕
//! config.toml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use chatcfg_webui::application::{ConfigStore, SharedChatConfig};
use chatcfg_webui::domain::config::{DEFAULT_CONFIG_PATH, DEFAULT_PORT};
use chatcfg_webui::domain::WebUiConfig;
use chatcfg_webui::infrastructure::storage::config_file::{load_chat_config, LoadedChatConfig};
use chatcfg_webui::infrastructure::{run_server, TomlFileStore};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Web editor for chat allow/deny lists.
#[derive(Debug, Parser)]
#[command(
    name = "chatcfg-webui",
    about = "HTTP editor for the chat whitelist/blacklist configuration",
    version
)]
struct Cli {
    /// IP address to bind the HTTP server to.
    ///
    /// `0.0.0.0` accepts connections on every interface; use `127.0.0.1` to
    /// keep the editor local.
    #[arg(long, default_value = "0.0.0.0", env = "CHATCFG_WEBUI_HOST")]
    host: String,

    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "CHATCFG_WEBUI_PORT")]
    port: u16,

    /// Path of the TOML configuration file whose `[chat]` table is edited.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, env = "CHATCFG_CONFIG_PATH")]
    config: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`WebUiConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--host` is not a valid IP address.
    fn into_webui_config(self) -> anyhow::Result<WebUiConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.host, self.port))?;

        Ok(WebUiConfig {
            bind_addr,
            config_path: self.config,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. Logging is initialised from `RUST_LOG` (falls back to `info`).
/// 2. CLI arguments are parsed into a [`WebUiConfig`].
/// 3. The `[chat]` table is loaded from the configuration file.  A missing
///    file is not fatal: defaults are used and the first save will report
///    the missing file.
/// 4. A [`ConfigStore`] is built over the shared configuration and a
///    [`TomlFileStore`] for the same path.
/// 5. [`run_server`] serves until Ctrl+C, then drains in-flight requests.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Parse CLI arguments ───────────────────────────────────────────────────
    let config = Cli::parse().into_webui_config()?;

    info!(
        "chat configuration WebUI starting, bind={}, config={}",
        config.bind_addr,
        config.config_path.display()
    );

    // ── Initial configuration ─────────────────────────────────────────────────
    let chat = match load_chat_config(&config.config_path)
        .with_context(|| format!("failed to load {}", config.config_path.display()))?
    {
        LoadedChatConfig::FromFile(chat) => chat,
        LoadedChatConfig::Defaults(chat) => {
            warn!(
                "{} not found, starting with default chat settings",
                config.config_path.display()
            );
            chat
        }
    };

    let shared: SharedChatConfig = Arc::new(RwLock::new(chat));
    let documents = Arc::new(TomlFileStore::new(config.config_path.clone()));
    let store = Arc::new(ConfigStore::new(shared, documents));

    // ── Graceful shutdown ─────────────────────────────────────────────────────
    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                error!("failed to listen for Ctrl+C signal: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    run_server(&config, store, shutdown).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
