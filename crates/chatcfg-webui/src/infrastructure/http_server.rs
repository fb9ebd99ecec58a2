//! HTTP server: routes, handlers and the serve loop.
//!
//! | Method | Path          | Response                                         |
//! |--------|---------------|--------------------------------------------------|
//! | GET    | `/`           | the control page (static HTML)                   |
//! | GET    | `/api/config` | current [`ChatConfig`] snapshot                  |
//! | POST   | `/api/config` | 200 [`UpdateResponse`] / 400, 500 [`ErrorResponse`] |
//!
//! Status mapping for `POST /api/config`:
//!
//! - malformed body, missing `field`/`value`, or a rejected edit → 400
//! - edit applied but the file could not be saved → 500
//! - a handler panic → 500 (caught by [`CatchPanicLayer`]; the process keeps
//!   serving)
//!
//! [`ChatConfig`]: chatcfg_core::ChatConfig

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::application::{ConfigStore, StoreError};
use crate::domain::{ErrorResponse, UpdateRequest, UpdateResponse, WebUiConfig};

/// The control page, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../static/index.html");

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the complete application router around `store`.
pub fn build_router(store: Arc<ConfigStore>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/api/config",
            get(get_config_handler).post(update_config_handler),
        )
        .with_state(store)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission) or the server fails while running.
pub async fn run_server<F>(config: &WebUiConfig, store: Arc<ConfigStore>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind WebUI listener on {}", config.bind_addr))?;

    info!("WebUI started, visit http://{}", config.bind_addr);
    serve(listener, store, shutdown).await
}

/// Serves on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an error if accepting connections fails fatally.
pub async fn serve<F>(listener: TcpListener, store: Arc<ConfigStore>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown)
        .await
        .context("WebUI server error")?;

    info!("WebUI stopped");
    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_config_handler(State(store): State<Arc<ConfigStore>>) -> Response {
    Json(store.get_snapshot().await).into_response()
}

/// Takes the raw body so that every malformed request still gets the
/// `{"success": false, "error": ...}` shape instead of an extractor rejection.
async fn update_config_handler(State(store): State<Arc<ConfigStore>>, body: Bytes) -> Response {
    let request = match UpdateRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("[WebUI] rejected update request: {e}");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.apply_update(&request.field, &request.value).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(UpdateResponse::new(outcome.message, outcome.config)),
        )
            .into_response(),
        Err(StoreError::Update(e)) => {
            warn!("[WebUI] rejected update of {}: {e}", request.field);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ StoreError::Persist(_)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("[WebUI] request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
