//! Local development stub of the question service.
//!
//! Lets the client run end to end against `http://localhost:8000` without the
//! real generation backend: it validates submissions the same way the form
//! does and answers with canned questions.

use std::net::SocketAddr;

use axum::{
  routing::{get, post},
  Router,
};
use tokio::net::TcpListener;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::DEFAULT_ENDPOINT_PATH;

pub mod http;

/// Build the stub router with:
/// - `GET /api/health`
/// - `POST /api/generate-questions`
/// - CORS (allow any origin/method/headers), it is a dev tool
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router() -> Router {
  Router::new()
    .route("/api/health", get(http::http_health))
    .route(DEFAULT_ENDPOINT_PATH, post(http::http_post_generate_questions))
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any),
    )
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Serve the stub until Ctrl-C.
pub async fn serve(port: u16) -> std::io::Result<()> {
  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  let listener = TcpListener::bind(addr).await?;
  info!(target: "interview_prep", %addr, "Development stub listening");
  axum::serve(listener, build_router())
    .with_graceful_shutdown(async {
      let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

#[cfg(test)]
#[path = "../tests/devserver_tests.rs"]
mod tests;
