use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to stderr with the given prefix.
pub fn create_stderr_logger(prefix: Option<String>) -> InfoLogger {
    match prefix {
        Some(prefix) => Arc::new(move |msg: &str| eprintln!("{prefix}{msg}")),
        None => Arc::new(|msg: &str| eprintln!("{msg}")),
    }
}

/// Creates a logger which drops all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
