//! # designfit - Interior Design Career Assessment
//!
//! The main binary for the designfit assessment engine.
//!
//! This application provides:
//! - Interactive terminal questionnaire
//! - Answer-sheet scoring (TOML / JSON)
//! - Question bank and tier listings
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              apps/designfit (THE BINARY)             │
//! │                                                      │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────┐   │
//! │  │ Interactive  │  │ Answer sheet │  │  Listings │   │
//! │  │ (stdin/out)  │  │ (toml/json)  │  │  (text)   │   │
//! │  └──────┬───────┘  └──────┬───────┘  └─────┬─────┘   │
//! │         └─────────────────┼────────────────┘         │
//! │                           ▼                          │
//! │                 ┌──────────────────┐                 │
//! │                 │  designfit-core  │                 │
//! │                 │   (THE LOGIC)    │                 │
//! │                 └──────────────────┘                 │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Take the assessment
//! designfit
//!
//! # Score a prepared answer sheet
//! designfit score --answers answers.toml --json
//!
//! # Inspect the questions
//! designfit bank --instrument wiscar
//! ```

use clap::Parser;
use designfit::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing on stderr; DESIGNFIT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DESIGNFIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "designfit=debug"
    } else {
        "designfit=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the designfit startup banner.
fn print_banner() {
    println!(
        r#"
  designfit v{}
  Interior Design Career Assessment

  Psychological Fit • Technical Aptitude • WISCAR
"#,
        env!("CARGO_PKG_VERSION")
    );
}
