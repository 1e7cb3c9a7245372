/// Sink for the loader's notices and errors.
pub trait Logger {
    fn message(&self, text: &str);
    fn error(&self, text: &str);
}

/// Forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn message(&self, text: &str) {
        log::info!("{text}");
    }

    fn error(&self, text: &str) {
        log::error!("{text}");
    }
}
