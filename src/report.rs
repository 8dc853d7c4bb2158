//! Severity-tagged status reporting
//!
//! The scan and rename logic never talks to the console directly; it emits
//! status lines through a [`Reporter`] so callers decide how (or whether)
//! to render them.

use std::sync::Mutex;

/// Severity of a reported status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational progress message.
    Info,
    /// A folder was skipped for a recoverable reason.
    Warning,
    /// A folder-local or run-level failure.
    Error,
    /// A rename was applied.
    Success,
}

/// Sink for status lines emitted during directory resolution and renaming.
pub trait Reporter {
    /// Report an informational message.
    fn info(&self, message: &str);
    /// Report a warning.
    fn warning(&self, message: &str);
    /// Report an error.
    fn error(&self, message: &str);
    /// Report a successful rename.
    fn success(&self, message: &str);
}

/// Reporter that discards all messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
}

/// Reporter that records every message with its severity.
///
/// Used by tests to assert on emitted diagnostics; also usable by GUI
/// embedders that render messages after the fact.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().expect("reporter mutex poisoned").clone()
    }

    /// Number of recorded events with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.events
            .lock()
            .expect("reporter mutex poisoned")
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    fn record(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .expect("reporter mutex poisoned")
            .push((severity, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.record(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn success(&self, message: &str) {
        self.record(Severity::Success, message);
    }
}
