//! Terminal front-end for the document QA page
//!
//! Drives the interaction controller with a view that prints region updates
//! instead of mutating a document tree.
//!
//! ## Usage
//!
//! Point the client at the service (defaults to the development address):
//! ```bash
//! export DOCQA_BASE_URL="http://localhost:5000"
//! ```
//!
//! Run the demo:
//! ```bash
//! cargo run -p docqa-console
//! ```
//!
//! Commands: `upload <path>`, `ask <question>`, `logs`, `quit`.

use docqa_client::PdfUpload;
use docqa_controller::state::{AskRegion, LogsRegion, UploadRegion};
use docqa_controller::{InteractionController, PageView, ServiceEnvironment, Tone};
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How many trailing log lines to show when following the tail
const LOG_TAIL_LINES: usize = 20;

/// View that renders regions to stdout
struct ConsoleView;

impl PageView for ConsoleView {
    fn render_status(&mut self, status: &UploadRegion) {
        match status.tone {
            Tone::Success => println!("✓ {}", status.text),
            Tone::Error => println!("✗ {}", status.text),
            Tone::Muted => println!("… {}", status.text),
        }
    }

    fn render_result(&mut self, result: &AskRegion) {
        if result.loader_visible {
            println!("Thinking...");
            return;
        }

        if result.result_visible {
            if let Some(rationale) = &result.rationale {
                println!("[{rationale}]");
            }
            println!("\n{}\n", result.answer);
        }
    }

    fn render_logs(&mut self, logs: &LogsRegion) {
        if !logs.follow_tail {
            println!("{}", logs.text);
            return;
        }

        // The terminal analogue of scrolling to the bottom edge
        let lines: Vec<&str> = logs.text.lines().collect();
        let skipped = lines.len().saturating_sub(LOG_TAIL_LINES);
        if skipped > 0 {
            println!("... ({skipped} earlier lines)");
        }
        for line in &lines[skipped..] {
            println!("{line}");
        }
    }
}

/// Read a file into an upload, keeping its original filename
fn read_upload(path: &str) -> io::Result<PdfUpload> {
    let bytes = std::fs::read(path)?;
    let file_name = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned());

    Ok(PdfUpload::new(file_name, bytes))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa_console=info,docqa_controller=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Document QA Console ===");
    println!("Commands: upload <path> | ask <question> | logs | quit\n");

    let environment = ServiceEnvironment::from_env();
    let mut controller = InteractionController::new(environment, ConsoleView);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if let Some(path) = input.strip_prefix("upload ") {
            match read_upload(path.trim()) {
                Ok(upload) => controller.submit_upload(Some(upload)).await,
                Err(e) => println!("✗ Could not read {path}: {e}"),
            }
        } else if input.eq_ignore_ascii_case("upload") {
            // Submitting with nothing selected mirrors the empty file picker
            controller.submit_upload(None).await;
        } else if let Some(question) = input.strip_prefix("ask ") {
            controller.submit_question(question).await;
        } else if input.eq_ignore_ascii_case("logs") {
            controller.load_logs().await;
        } else if !input.is_empty() {
            println!("Unknown command: {input}");
        }
    }

    Ok(())
}
