use std::error::Error;

/// Contract for the external error-reporting sink that
/// receives every failed send attempt in addition to the
/// error log. Implemented by whatever tracing facility the
/// embedding application uses.
pub trait ErrorTracer {
    /// Report a failed operation as (message, cause) pair.
    ///
    /// # Arguments
    ///
    /// - `message`:   short description of the failed operation
    /// - `cause`:     the error that made it fail
    fn trace_error(&self, message: &str, cause: &dyn Error);
}

/// Discards every report. For callers that have no external
/// tracing facility and rely on the error log alone.
pub struct NoErrorTracer;

impl ErrorTracer for NoErrorTracer {
    fn trace_error(&self, _message: &str, _cause: &dyn Error) {}
}
