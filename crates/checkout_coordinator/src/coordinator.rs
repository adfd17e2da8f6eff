// --- File: crates/checkout_coordinator/src/coordinator.rs ---
//! The checkout state machine.
//!
//! ```text
//! Idle -> FetchingIntent -> Ready -> Presenting -> Completed
//!               |                      |  ^    -> Canceled --(pay)--> Presenting
//!               v                      v  |
//!             Failed                 Failed
//! ```
//!
//! Pure and synchronous: it never performs I/O. The caller runs the fetch and
//! the presentation and feeds their results back in. Requests that do not fit
//! the current state are rejected without touching it.

use checkout_common::{
    CheckoutError, ClientSecret, PaymentSheetConfiguration, PaymentSheetResult,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::state::{
    CheckoutState, CheckoutView, ErrorAlert, Feedback, PAYMENT_CANCELED_MESSAGE,
    PAYMENT_COMPLETE_MESSAGE, PAY_BUTTON_LABEL,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} while checkout is {state}")]
    Invalid {
        action: &'static str,
        state: &'static str,
    },
}

impl From<TransitionError> for CheckoutError {
    fn from(err: TransitionError) -> Self {
        CheckoutError::InternalError(err.to_string())
    }
}

/// Arguments for one payment sheet presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentRequest {
    pub secret: ClientSecret,
    pub configuration: PaymentSheetConfiguration,
}

#[derive(Debug)]
pub struct CheckoutCoordinator {
    state: CheckoutState,
    error: Option<String>,
    configuration: PaymentSheetConfiguration,
}

impl CheckoutCoordinator {
    pub fn new(configuration: PaymentSheetConfiguration) -> Self {
        Self {
            state: CheckoutState::Idle,
            error: None,
            configuration,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Message of the error dialog, if one is showing.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pay is offered only while a secret is held outside of a presentation.
    pub fn is_pay_enabled(&self) -> bool {
        matches!(
            self.state,
            CheckoutState::Ready(_) | CheckoutState::Canceled(_)
        )
    }

    pub fn view(&self) -> CheckoutView {
        CheckoutView {
            phase: self.state.name(),
            pay_label: PAY_BUTTON_LABEL,
            pay_enabled: self.is_pay_enabled(),
            error_alert: self.error.as_ref().map(ErrorAlert::new),
        }
    }

    /// `Idle -> FetchingIntent`. The caller must then run exactly one fetch.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.state {
            CheckoutState::Idle => {
                self.transition(CheckoutState::FetchingIntent);
                Ok(())
            }
            _ => Err(self.reject("start fetching a payment intent")),
        }
    }

    /// Resolves the outstanding fetch.
    pub fn intent_fetched(
        &mut self,
        result: Result<ClientSecret, CheckoutError>,
    ) -> Result<Option<Feedback>, TransitionError> {
        if !matches!(self.state, CheckoutState::FetchingIntent) {
            return Err(self.reject("accept a payment intent"));
        }
        match result {
            Ok(secret) => {
                self.transition(CheckoutState::Ready(secret));
                Ok(None)
            }
            Err(err) => Ok(Some(self.fail(err))),
        }
    }

    /// `Ready | Canceled -> Presenting`. Returns what to hand to the sheet.
    pub fn pay(&mut self) -> Result<PresentRequest, TransitionError> {
        let secret = match &self.state {
            CheckoutState::Ready(secret) | CheckoutState::Canceled(secret) => secret.clone(),
            _ => return Err(self.reject("pay")),
        };
        self.transition(CheckoutState::Presenting(secret.clone()));
        Ok(PresentRequest {
            secret,
            configuration: self.configuration.clone(),
        })
    }

    /// Resolves the outstanding presentation with the sheet's single result.
    pub fn sheet_finished(
        &mut self,
        result: PaymentSheetResult,
    ) -> Result<Feedback, TransitionError> {
        let secret = match &self.state {
            CheckoutState::Presenting(secret) => secret.clone(),
            _ => return Err(self.reject("accept a payment sheet result")),
        };
        let feedback = match result {
            PaymentSheetResult::Completed => {
                self.transition(CheckoutState::Completed);
                Feedback::Toast(PAYMENT_COMPLETE_MESSAGE)
            }
            PaymentSheetResult::Canceled => {
                self.transition(CheckoutState::Canceled(secret));
                Feedback::Toast(PAYMENT_CANCELED_MESSAGE)
            }
            PaymentSheetResult::Failed(reason) => {
                self.fail(CheckoutError::PaymentSheetError(reason))
            }
        };
        Ok(feedback)
    }

    /// Clears the error dialog. Never restarts the fetch.
    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            info!("[Checkout] Error dialog dismissed");
        }
    }

    fn fail(&mut self, err: CheckoutError) -> Feedback {
        let message = err.to_string();
        warn!("[Checkout] Checkout failed: {}", message);
        self.error = Some(message.clone());
        self.transition(CheckoutState::Failed(err));
        Feedback::ErrorDialog(message)
    }

    fn transition(&mut self, next: CheckoutState) {
        info!("[Checkout] {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        let err = TransitionError::Invalid {
            action,
            state: self.state.name(),
        };
        warn!("[Checkout] Rejected: {}", err);
        err
    }
}
