// --- File: crates/checkout_coordinator/src/lib.rs ---

pub mod coordinator;
pub mod notifier;
pub mod screen;
pub mod state;

pub use coordinator::{CheckoutCoordinator, PresentRequest, TransitionError};
pub use notifier::UserNotifier;
pub use screen::{CheckoutScreen, ScreenHandle, UserAction};
pub use state::{CheckoutState, CheckoutView, ErrorAlert, Feedback};
