// --- File: crates/checkout_coordinator/src/state.rs ---
use checkout_common::{CheckoutError, ClientSecret};

pub const PAY_BUTTON_LABEL: &str = "Pay now";
pub const ERROR_DIALOG_TITLE: &str = "Error occurred during checkout";
pub const ERROR_DIALOG_CONFIRM: &str = "Ok";
pub const PAYMENT_COMPLETE_MESSAGE: &str = "Payment complete!";
pub const PAYMENT_CANCELED_MESSAGE: &str = "Payment canceled!";

/// Where one checkout screen visit is.
///
/// The secret lives inside the states that need it, so it is dropped as soon
/// as the flow leaves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    FetchingIntent,
    Ready(ClientSecret),
    Presenting(ClientSecret),
    Completed,
    /// The sheet was dismissed; the intent is still open and can be paid.
    Canceled(ClientSecret),
    Failed(CheckoutError),
}

impl CheckoutState {
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::FetchingIntent => "fetching intent",
            CheckoutState::Ready(_) => "ready",
            CheckoutState::Presenting(_) => "presenting",
            CheckoutState::Completed => "completed",
            CheckoutState::Canceled(_) => "canceled",
            CheckoutState::Failed(_) => "failed",
        }
    }

    pub fn secret(&self) -> Option<&ClientSecret> {
        match self {
            CheckoutState::Ready(secret)
            | CheckoutState::Presenting(secret)
            | CheckoutState::Canceled(secret) => Some(secret),
            _ => None,
        }
    }
}

/// The dismissible error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    pub title: &'static str,
    pub message: String,
    pub confirm_label: &'static str,
}

impl ErrorAlert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_DIALOG_TITLE,
            message: message.into(),
            confirm_label: ERROR_DIALOG_CONFIRM,
        }
    }
}

/// Everything a front end needs to draw the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub phase: &'static str,
    pub pay_label: &'static str,
    pub pay_enabled: bool,
    pub error_alert: Option<ErrorAlert>,
}

/// What the user should be told after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Transient notification.
    Toast(&'static str),
    /// Shown through `CheckoutView::error_alert` until dismissed.
    ErrorDialog(String),
}
