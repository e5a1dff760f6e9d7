/// Sink for user-facing notifications raised while translating
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);

    fn warning(&self, message: &str);
}

/// Notifier that only logs, used when no front-end is attached
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
