//! HTTP server for the contacts manager.
//!
//! This module wires the pages, the session middleware, static assets and
//! request logging into an axum `Router`.

pub mod handlers;
pub mod session;
pub mod views;

use crate::config::Config;
use crate::session::SessionStore;
use anyhow::Result;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// State shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }
}

/// Build the application router.
///
/// Page routes run inside the session middleware; the health check and
/// static assets do not touch sessions.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/contacts", get(handlers::list_contacts))
        .route(
            "/contacts/new",
            get(handlers::new_contact_form).post(handlers::create_contact),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::attach_session,
        ))
        .route("/healthz", get(handlers::healthz))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(handlers::not_found);

    with_request_layers(router).with_state(state)
}

/// Wrap `router` in the layers every request passes through: an access log
/// at `info` and panic recovery, so a failing handler yields a 500 instead of
/// taking the connection down.
fn with_request_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(CatchPanicLayer::new()).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Serve `app` on the configured address until Ctrl-C.
pub async fn run_server(config: &Config, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
