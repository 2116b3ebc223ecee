//! CLI error types

use thiserror::Error;

use crate::auth::CryptoError;

/// Errors surfaced to the process exit path.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed error: {0}")]
    Crypto(#[from] CryptoError),
}
