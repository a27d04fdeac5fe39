use tracing::warn;

/// Receives notices about log entries skipped during reconstruction.
pub trait Diagnostics: Send + Sync {
    fn skipped_entry(&self, key: &str, reason: &str);
}

/// Default sink: one `warn` event per skipped entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn skipped_entry(&self, key: &str, reason: &str) {
        warn!(key, reason, "Skipping malformed round entry");
    }
}
