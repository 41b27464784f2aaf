use crate::DataError;

/// Observer for failures that a fail-soft operation swallows.
///
/// `ProjectRepository` never returns content API errors to its caller; it
/// reports them here instead so they stay observable.
pub trait Diagnostics: Send + Sync {
    fn report(&self, operation: &'static str, error: &DataError);
}

/// Default observer: emits one `tracing` event per swallowed failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, operation: &'static str, error: &DataError) {
        match error {
            DataError::NotFound(id) => {
                tracing::warn!(operation, id = %id, "content record not found");
            }
            _ => tracing::error!(operation, error = %error, "content request failed"),
        }
    }
}
