//! Shows the raw HTTP request an Adafruit IO call would make.
//!
//! Nothing reaches io.adafruit.com: the client is pointed at a loopback server
//! that prints whatever it receives, so a bogus key is fine. Log lines go to
//! stderr; stdout only carries the dumps.
//!
//! ```text
//! $ aio-request-viewer -key "12345ABC"
//! 2026-10-16T09:10:07.000000Z  INFO received request
//! ---
//! POST /api/v2/feeds/beta-test/data HTTP/1.1
//! Host: 127.0.0.1:53626
//! Accept: application/json
//! Content-Length: 14
//! Content-Type: application/json
//! User-Agent: Adafruit IO Rust Client v0.1.0
//! X-Aio-Key: 12345ABC
//!
//! {"value":"22"}
//! ---
//! ```

use aio_request_viewer::utils::logger;
use aio_request_viewer::{CliConfig, Inspector, StdoutSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse_go_style();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let credentials = config.credentials();
    let call = config.api_call();

    Inspector::new(Arc::new(StdoutSink))
        .run(&credentials, call.as_ref())
        .await?;

    Ok(())
}
