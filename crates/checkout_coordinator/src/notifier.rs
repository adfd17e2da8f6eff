// --- File: crates/checkout_coordinator/src/notifier.rs ---

/// Shows transient notifications ("toasts") to the user.
#[cfg_attr(test, mockall::automock)]
pub trait UserNotifier: Send + Sync {
    fn show_toast(&self, message: &str);
}
