//! aviary CLI entry point
//!
//! A minimal entrypoint that parses arguments, dispatches to the CLI
//! module, prints errors to stderr, and exits non-zero on failure. All
//! setup lives in `cli::run`.

use aviary::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
