//! Destinations for advisory warnings.

use log::warn;

/// Receives formatted warning messages.
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&mut self, message: &str) {
        warn!("{message}");
    }
}

/// Collects warnings, mostly useful for callers that report them later.
impl WarningSink for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
