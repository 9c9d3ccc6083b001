use crate::capture::{CaptureServer, DEFAULT_BODY_LIMIT};
use crate::client::{redirect, AioClient};
use crate::core::{ApiCall, Credentials, DumpSink, Result};
use std::sync::Arc;

/// Runs one API call against a throwaway capture server.
pub struct Inspector {
    sink: Arc<dyn DumpSink>,
    body_limit: usize,
}

impl Inspector {
    pub fn new(sink: Arc<dyn DumpSink>) -> Self {
        Self {
            sink,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Starts the capture server, redirects a fresh client to it and invokes
    /// `call` once. The outcome of the call is logged, never returned; the
    /// server is torn down on every exit path.
    pub async fn run(&self, credentials: &Credentials, call: &dyn ApiCall) -> Result<()> {
        let server = CaptureServer::builder()
            .body_limit(self.body_limit)
            .start(self.sink.clone())
            .await?;
        tracing::info!("Capture server listening on {}", server.url());

        let mut client = AioClient::new(credentials.username.as_str(), credentials.key.as_str());
        if redirect(&mut client, server.url())? {
            tracing::debug!("Client redirected to {}", client.base_url());
        }

        tracing::info!("Invoking {}", call.name());
        match call.invoke(&mut client).await {
            Ok(()) => tracing::debug!("{} completed", call.name()),
            Err(e) => tracing::debug!("{} returned an error: {}", call.name(), e),
        }

        server.close().await;
        Ok(())
    }
}
