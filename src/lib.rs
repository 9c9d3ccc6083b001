pub mod capture;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use capture::{CaptureServer, MemorySink, StdoutSink};
pub use client::{redirect, AioClient};
pub use crate::core::{calls::CallKind, inspector::Inspector};
pub use domain::model::{Credentials, Data, Feed};
pub use domain::ports::{ApiCall, DumpSink};
pub use utils::error::{Result, ViewerError};
