//! Injected log sink for report destinations.
//!
//! Report destinations narrate their outcome ("published", "skipped",
//! "API error ...") through a handle passed at construction, so the lines
//! land wherever the caller wants them and tests can assert on exact
//! ordering.

use std::sync::Mutex;

/// Append-only message sink. Writes preserve call order.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Production sink: one line per message on stdout, mirrored at debug level
/// for `VERDICT_LOG` diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&self, message: &str) {
        println!("{message}");
        tracing::debug!(target: "vdt::report", "{message}");
    }
}

/// Capturing sink for tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("log buffer poisoned").clone()
    }
}

impl LogSink for BufferSink {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .expect("log buffer poisoned")
            .push(message.to_string());
    }
}
