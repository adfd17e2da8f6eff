// --- File: crates/checkout_coordinator/src/screen.rs ---
//! Async driver for one checkout screen visit.
//!
//! A single task owns the [`CheckoutCoordinator`]. The intent fetch and the
//! payment sheet presentation run on their own tasks and report back by
//! sending one message into that task, which is the only place state changes.
//! Front ends talk to the screen through a [`ScreenHandle`].

use std::sync::Arc;

use checkout_common::{
    CheckoutError, ClientSecret, IntentSource, PaymentSheet, PaymentSheetConfiguration,
    PaymentSheetResult,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::coordinator::{CheckoutCoordinator, PresentRequest};
use crate::notifier::UserNotifier;
use crate::state::{CheckoutView, Feedback};

const ACTION_BUFFER: usize = 16;

/// Input coming from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Pay,
    DismissError,
    Close,
}

/// Results of background work, marshalled back onto the screen task.
#[derive(Debug)]
enum ScreenEvent {
    IntentFetched(Result<ClientSecret, CheckoutError>),
    SheetFinished(PaymentSheetResult),
}

pub struct CheckoutScreen {
    coordinator: CheckoutCoordinator,
    intents: Arc<dyn IntentSource>,
    sheet: Arc<dyn PaymentSheet>,
    notifier: Arc<dyn UserNotifier>,
    view_tx: watch::Sender<CheckoutView>,
    in_flight: Option<JoinHandle<()>>,
}

impl CheckoutScreen {
    /// Opens the screen: spawns its task, which immediately starts fetching the
    /// payment intent. Must be called inside a tokio runtime.
    pub fn open(
        intents: Arc<dyn IntentSource>,
        sheet: Arc<dyn PaymentSheet>,
        notifier: Arc<dyn UserNotifier>,
        configuration: PaymentSheetConfiguration,
    ) -> ScreenHandle {
        let coordinator = CheckoutCoordinator::new(configuration);
        let (view_tx, view_rx) = watch::channel(coordinator.view());
        let (action_tx, action_rx) = mpsc::channel(ACTION_BUFFER);

        let screen = CheckoutScreen {
            coordinator,
            intents,
            sheet,
            notifier,
            view_tx,
            in_flight: None,
        };
        let task = tokio::spawn(screen.run(action_rx));

        ScreenHandle {
            actions: action_tx,
            view: view_rx,
            task,
        }
    }

    async fn run(mut self, mut actions: mpsc::Receiver<UserAction>) {
        // One slot is enough: a fetch and a presentation are never outstanding together.
        let (event_tx, mut events) = mpsc::channel(1);

        self.begin_fetch(&event_tx);
        self.publish();

        loop {
            tokio::select! {
                Some(event) = events.recv() => {
                    self.in_flight = None;
                    self.on_event(event);
                }
                action = actions.recv() => match action {
                    Some(UserAction::Pay) => self.on_pay(&event_tx),
                    Some(UserAction::DismissError) => self.coordinator.dismiss_error(),
                    Some(UserAction::Close) | None => break,
                },
            }
            self.publish();
        }

        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        info!(
            "[Checkout Screen] Closed while {}",
            self.coordinator.state().name()
        );
    }

    fn begin_fetch(&mut self, events: &mpsc::Sender<ScreenEvent>) {
        if self.coordinator.start().is_err() {
            return;
        }
        let intents = Arc::clone(&self.intents);
        let events = events.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = intents.fetch_payment_intent().await;
            if events.send(ScreenEvent::IntentFetched(result)).await.is_err() {
                debug!("[Checkout Screen] Screen closed before the intent fetch finished");
            }
        }));
    }

    fn on_pay(&mut self, events: &mpsc::Sender<ScreenEvent>) {
        // Rejections are logged by the coordinator; a disabled button does nothing.
        let Ok(PresentRequest {
            secret,
            configuration,
        }) = self.coordinator.pay()
        else {
            return;
        };

        info!(
            "[Checkout Screen] Presenting payment sheet for {}",
            configuration.merchant_display_name
        );
        let sheet = Arc::clone(&self.sheet);
        let events = events.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = sheet.present(secret, configuration).await;
            if events.send(ScreenEvent::SheetFinished(result)).await.is_err() {
                debug!("[Checkout Screen] Screen closed before the payment sheet finished");
            }
        }));
    }

    fn on_event(&mut self, event: ScreenEvent) {
        let feedback = match event {
            ScreenEvent::IntentFetched(result) => {
                self.coordinator.intent_fetched(result).ok().flatten()
            }
            ScreenEvent::SheetFinished(result) => self.coordinator.sheet_finished(result).ok(),
        };
        match feedback {
            Some(Feedback::Toast(message)) => self.notifier.show_toast(message),
            // rendered through CheckoutView::error_alert
            Some(Feedback::ErrorDialog(_)) | None => {}
        }
    }

    fn publish(&self) {
        let view = self.coordinator.view();
        self.view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

/// The front end's side of an open checkout screen.
pub struct ScreenHandle {
    actions: mpsc::Sender<UserAction>,
    view: watch::Receiver<CheckoutView>,
    task: JoinHandle<()>,
}

impl ScreenHandle {
    pub async fn dispatch(&self, action: UserAction) -> Result<(), CheckoutError> {
        self.actions
            .send(action)
            .await
            .map_err(|_| screen_closed())
    }

    /// The most recently published view.
    pub fn view(&self) -> CheckoutView {
        self.view.borrow().clone()
    }

    /// A receiver that is notified whenever the view changes.
    pub fn subscribe(&self) -> watch::Receiver<CheckoutView> {
        self.view.clone()
    }

    /// Waits until the published view satisfies `predicate` (checking the current one first).
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&CheckoutView) -> bool,
    ) -> Result<CheckoutView, CheckoutError> {
        self.view
            .wait_for(predicate)
            .await
            .map(|view| view.clone())
            .map_err(|_| screen_closed())
    }

    /// Closes the screen and waits for its task to finish. The held secret is dropped.
    pub async fn close(self) -> Result<(), CheckoutError> {
        // The task may already be gone if the front end dropped its side.
        let _ = self.actions.send(UserAction::Close).await;
        self.task.await.map_err(|e| {
            CheckoutError::InternalError(format!("checkout screen task failed: {}", e))
        })
    }
}

fn screen_closed() -> CheckoutError {
    CheckoutError::InternalError("checkout screen is closed".to_string())
}
