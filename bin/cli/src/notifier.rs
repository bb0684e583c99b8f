//! Terminal notification channel.

use data_form_widget::Notifier;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Prints failure alerts to a terminal stream.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    /// Creates a notifier writing to the given stream.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Creates a notifier writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // Nowhere left to report a failed write.
        let _ = writeln!(out, "\n!! {message}\n").and_then(|()| out.flush());
    }
}
