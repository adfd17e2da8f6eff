// File: services/checkout_console/src/sheet.rs
use checkout_common::{
    BoxOutcome, ClientSecret, PaymentSheet, PaymentSheetConfiguration, PaymentSheetResult,
};
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

pub const COMPLETE_INPUT: &str = "c";
pub const CANCEL_INPUT: &str = "x";

/// Payment sheet simulated on the terminal.
///
/// The console loop owns stdin and forwards lines here while a presentation is
/// outstanding.
pub struct ConsolePaymentSheet {
    input: Mutex<mpsc::Receiver<String>>,
}

impl ConsolePaymentSheet {
    pub fn new(input: mpsc::Receiver<String>) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

/// `c` completes, `x` cancels, anything else fails with the text as the message.
pub fn parse_sheet_input(line: &str) -> PaymentSheetResult {
    match line.trim() {
        COMPLETE_INPUT => PaymentSheetResult::Completed,
        CANCEL_INPUT => PaymentSheetResult::Canceled,
        "" => PaymentSheetResult::Failed("The payment could not be processed.".to_string()),
        message => PaymentSheetResult::Failed(message.to_string()),
    }
}

impl PaymentSheet for ConsolePaymentSheet {
    fn present(
        &self,
        secret: ClientSecret,
        configuration: PaymentSheetConfiguration,
    ) -> BoxOutcome<'_, PaymentSheetResult> {
        Box::pin(async move {
            info!(
                "[Console Sheet] Presenting {:?} for {}",
                secret, configuration.merchant_display_name
            );
            println!(
                "--- {} ---\nEnter '{}' to complete, '{}' to cancel, or a failure message:",
                configuration.merchant_display_name, COMPLETE_INPUT, CANCEL_INPUT
            );

            match self.input.lock().await.recv().await {
                Some(line) => parse_sheet_input(&line),
                None => {
                    warn!("[Console Sheet] Input closed while presenting");
                    PaymentSheetResult::Failed("Payment sheet was closed.".to_string())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet_input() {
        assert_eq!(parse_sheet_input("c\n"), PaymentSheetResult::Completed);
        assert_eq!(parse_sheet_input(" x "), PaymentSheetResult::Canceled);
        assert_eq!(
            parse_sheet_input("Your card was declined."),
            PaymentSheetResult::Failed("Your card was declined.".to_string())
        );
    }

    #[tokio::test]
    async fn test_present_resolves_with_forwarded_line() {
        let (tx, rx) = mpsc::channel(1);
        let sheet = ConsolePaymentSheet::new(rx);
        tx.send("x".to_string()).await.unwrap();

        let result = sheet
            .present(
                ClientSecret::new("pi_1_secret_2"),
                PaymentSheetConfiguration::new("Example, Inc."),
            )
            .await;
        assert_eq!(result, PaymentSheetResult::Canceled);
    }

    #[tokio::test]
    async fn test_present_fails_when_input_closes() {
        let (tx, rx) = mpsc::channel(1);
        drop(tx);
        let sheet = ConsolePaymentSheet::new(rx);

        let result = sheet
            .present(
                ClientSecret::new("pi_1_secret_2"),
                PaymentSheetConfiguration::new("Example, Inc."),
            )
            .await;
        assert!(matches!(result, PaymentSheetResult::Failed(_)));
    }
}
