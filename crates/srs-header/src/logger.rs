//! Sink for the messages emitted while parsing a header.

/// Receives parse progress and failure details.
///
/// Passed to [`crate::SrsHeaderParser`] explicitly so that callers decide
/// where messages end up.
pub trait ParseLogger {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

impl<L: ParseLogger + ?Sized> ParseLogger for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Forwards messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ParseLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
