//! Loopback capture server: accepts any request, prints it, answers `{}`.

pub mod dump;
pub mod server;
pub mod sink;

pub use dump::{canonical_header_name, frame, render_request};
pub use server::{CaptureServer, CaptureServerBuilder, DEFAULT_BODY_LIMIT};
pub use sink::{MemorySink, StdoutSink};
