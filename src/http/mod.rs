//! # HTTP Surface
//!
//! A small hyper 1 server in front of the collection clients. Each accepted connection
//! is served on its own task; every request is answered by [`dispatch`], which maps
//! [`ApiError`](crate::error::ApiError) onto JSON error bodies.

mod responses;
mod routes;

pub use responses::HttpResponse;
pub use routes::dispatch;

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::clients::{CharacterClient, EpisodeClient};
use crate::lifecycle::CatalogSystem;
use crate::query::QueryError;

/// Shared, read-only request context.
pub struct AppState {
    pub characters: CharacterClient,
    pub episodes: EpisodeClient,
    pub started: Instant,
}

impl AppState {
    pub fn new(system: &CatalogSystem) -> Self {
        Self {
            characters: system.characters.clone(),
            episodes: system.episodes.clone(),
            started: Instant::now(),
        }
    }
}

/// Accepts connections until the surrounding task is dropped.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(req, &state).await }
                    });
                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        debug!(%peer, error = ?err, "Connection closed with error");
                    }
                });
            }
            Err(e) => warn!(error = %e, "Accept failed"),
        }
    }
}

async fn handle_request(
    req: Request<Incoming>,
    state: &AppState,
) -> Result<HttpResponse, Infallible> {
    let (parts, body) = req.into_parts();
    let response = match body.collect().await {
        Ok(collected) => dispatch(state, &parts.method, &parts.uri, collected.to_bytes()).await,
        Err(e) => {
            let e = QueryError::invalid("body", format!("Failed to read request body: {e}"));
            responses::api_error(&e.into())
        }
    };
    debug!(
        method = %parts.method,
        path = %parts.uri.path(),
        status = response.status().as_u16(),
        "Request"
    );
    Ok(response)
}
