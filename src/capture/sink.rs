use crate::domain::ports::DumpSink;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writes dumps to standard output, as the command-line tool does.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DumpSink for StdoutSink {
    fn emit(&self, framed_dump: &[u8]) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(framed_dump).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write request dump: {}", e);
        }
    }
}

/// Keeps every dump in memory, byte for byte.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    dumps: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dumps(&self) -> Vec<Vec<u8>> {
        self.dumps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Dumps as text, with invalid UTF-8 replaced. For eyeballing and assertions.
    pub fn dumps_lossy(&self) -> Vec<String> {
        self.dumps()
            .iter()
            .map(|dump| String::from_utf8_lossy(dump).into_owned())
            .collect()
    }
}

impl DumpSink for MemorySink {
    fn emit(&self, framed_dump: &[u8]) {
        self.dumps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(framed_dump.to_vec());
    }
}
