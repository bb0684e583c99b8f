//! Notification channel for failed loads.

/// Delivers failure messages to the user.
///
/// Called synchronously, once per failed Load, before the Load completes.
pub trait Notifier: Send + Sync {
    /// Presents a message to the user.
    fn notify(&self, message: &str);
}
