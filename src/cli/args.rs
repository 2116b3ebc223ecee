//! CLI argument definitions using clap
//!
//! Commands:
//! - aviary serve [--host <addr>] [--port <port>] [--seed]

use clap::{Parser, Subcommand};

/// aviary - A small JSON:API-compliant CRUD backend
#[derive(Parser, Debug)]
#[command(name = "aviary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Create an initial user and log its API token
        #[arg(long)]
        seed: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
