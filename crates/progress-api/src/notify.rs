//! Success and failure notices for user-facing saves.

/// Something the person at the keyboard should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(String),
    Failed(String),
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the service log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Saved(message) => tracing::info!(notice = %message, "saved"),
            Notice::Failed(message) => tracing::warn!(notice = %message, "save failed"),
        }
    }
}
