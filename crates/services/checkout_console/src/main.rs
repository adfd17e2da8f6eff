// File: services/checkout_console/src/main.rs
mod sheet;

use checkout_client::BackendClient;
use checkout_common::{internal_error, logging, CheckoutError, PaymentSheetConfiguration};
use checkout_config::load_config;
use checkout_coordinator::{
    CheckoutScreen, CheckoutView, ScreenHandle, UserAction, UserNotifier,
};
use sheet::ConsolePaymentSheet;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

const HELP: &str = "Commands: 'pay' to pay, 'ok' to dismiss an error, 'quit' to leave";
const PRESENTING_PHASE: &str = "presenting";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Pay,
    Dismiss,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "pay" | "p" => Some(Command::Pay),
        "ok" => Some(Command::Dismiss),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn render(view: &CheckoutView) -> String {
    let button = if view.pay_enabled { "enabled" } else { "disabled" };
    let mut out = format!("[{}] {} ({})", view.phase, view.pay_label, button);
    if let Some(alert) = &view.error_alert {
        out.push_str(&format!(
            "\n!! {}: {} [{}]",
            alert.title, alert.message, alert.confirm_label
        ));
    }
    out
}

/// Toasts go straight to stdout.
struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn show_toast(&self, message: &str) {
        println!(">> {}", message);
    }
}

#[tokio::main]
async fn main() {
    logging::init();
    let result = logging::log_result(
        run().await,
        "Checkout console finished",
        "Checkout console stopped",
    );
    if result.is_err() {
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CheckoutError> {
    let config = load_config()?;
    info!("Using backend at {}", config.backend.base_url);

    let client = BackendClient::new(config.backend.clone()).map_err(CheckoutError::from)?;
    let (sheet_tx, sheet_rx) = mpsc::channel(1);

    let mut handle = CheckoutScreen::open(
        Arc::new(client),
        Arc::new(ConsolePaymentSheet::new(sheet_rx)),
        Arc::new(ConsoleNotifier),
        PaymentSheetConfiguration::new(config.payment_sheet.merchant_display_name.clone()),
    );

    let mut views = handle.subscribe();
    let printer = tokio::spawn(async move {
        println!("{}", render(&views.borrow_and_update()));
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            println!("{}", render(&view));
        }
    });

    println!("{}", HELP);
    drive_screen(&mut handle, &sheet_tx, BufReader::new(tokio::io::stdin())).await?;

    handle.close().await?;
    printer.abort();
    Ok(())
}

/// Routes input lines to the screen until `quit` or end of input.
///
/// The line after an accepted `pay` is the sheet's answer. Reading resumes only
/// once the screen has published the outcome of that presentation.
async fn drive_screen<R>(
    handle: &mut ScreenHandle,
    sheet_input: &mpsc::Sender<String>,
    input: R,
) -> Result<(), CheckoutError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut presenting = false;

    while let Some(line) = lines.next_line().await.map_err(internal_error)? {
        if presenting {
            sheet_input.send(line).await.map_err(internal_error)?;
            handle.wait_for(|v| v.phase != PRESENTING_PHASE).await?;
            presenting = false;
            continue;
        }
        match parse_command(&line) {
            Some(Command::Pay) => {
                let view = handle.view();
                if !view.pay_enabled {
                    println!("Pay is not available while {}", view.phase);
                    continue;
                }
                handle.dispatch(UserAction::Pay).await?;
                // dispatch only queues; wait until the sheet is actually up
                handle.wait_for(|v| !v.pay_enabled).await?;
                presenting = true;
            }
            Some(Command::Dismiss) => handle.dispatch(UserAction::DismissError).await?,
            Some(Command::Quit) => break,
            None => println!("{}", HELP),
        }
    }
    Ok(())
}
