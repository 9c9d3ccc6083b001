use super::dump::{frame, render_request};
use crate::domain::ports::DumpSink;
use crate::utils::error::Result;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::{JoinError, JoinHandle};

pub const DEFAULT_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Body sent back for every captured request.
const CAPTURE_RESPONSE_BODY: &str = "{}";

#[derive(Clone)]
struct CaptureState {
    sink: Arc<dyn DumpSink>,
    body_limit: usize,
}

#[derive(Debug, Clone)]
pub struct CaptureServerBuilder {
    body_limit: usize,
}

impl Default for CaptureServerBuilder {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl CaptureServerBuilder {
    /// Requests with a larger body are answered with 500 and not dumped.
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Binds an ephemeral loopback port and starts serving in the background.
    pub async fn start(self, sink: Arc<dyn DumpSink>) -> Result<CaptureServer> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;

        let state = CaptureState {
            sink,
            body_limit: self.body_limit,
        };
        let router = Router::new().fallback(capture_request).with_state(state);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Capture server stopped: {}", e);
            }
        });

        tracing::debug!("Capture server listening on {}", addr);
        Ok(CaptureServer {
            addr,
            url: format!("http://{}", addr),
            handle: Some(handle),
        })
    }
}

/// Guard for a running capture server. The listener is released by
/// [`CaptureServer::close`] or, failing that, when the guard is dropped.
#[derive(Debug)]
pub struct CaptureServer {
    addr: SocketAddr,
    url: String,
    handle: Option<JoinHandle<()>>,
}

impl CaptureServer {
    pub fn builder() -> CaptureServerBuilder {
        CaptureServerBuilder::default()
    }

    pub async fn start(sink: Arc<dyn DumpSink>) -> Result<Self> {
        Self::builder().start(sink).await
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops serving and waits until the listening socket has been dropped.
    pub async fn close(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            report_serve_exit(handle.await);
        }
        tracing::debug!("Capture server on {} closed", self.addr);
    }
}

impl Drop for CaptureServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Logs a serve task that died by panicking; cancellation is the normal way out.
/// Returns whether a panic was reported.
fn report_serve_exit(result: std::result::Result<(), JoinError>) -> bool {
    match result {
        Err(e) if e.is_panic() => {
            tracing::error!("Capture server task panicked: {}", e);
            true
        }
        _ => false,
    }
}

async fn capture_request(State(state): State<CaptureState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, state.body_limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to dump {} {}: {}", parts.method, parts.uri, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let dump = render_request(&parts, &bytes);
    tracing::info!("received request");
    state.sink.emit(&frame(&dump));

    (
        [(header::CONTENT_TYPE, "application/json")],
        CAPTURE_RESPONSE_BODY,
    )
        .into_response()
}
