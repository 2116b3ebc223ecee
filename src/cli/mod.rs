//! # CLI Module
//!
//! Argument parsing and command dispatch. Owns process-level setup:
//! tracing initialization, store construction, seeding, and the serve
//! loop.

pub mod args;
pub mod errors;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::auth;
use crate::http_server::{serve, AppState, HttpServerConfig};
use crate::resource::Registry;
use crate::store::{MemoryStore, Record, Store};

use args::{Cli, Command};
pub use errors::CliError;

/// Parse arguments and run the selected command.
pub async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port, seed } => {
            let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
            if seed {
                seed_initial_user(store.as_ref())?;
            }

            let config = HttpServerConfig {
                host,
                port,
                ..Default::default()
            };
            let state = Arc::new(AppState::new(store, Registry::default()));
            serve(&config, state).await?;
        }
    }
    Ok(())
}

/// Create a first user so protected operations are usable on a fresh
/// store. The token is logged once; it is never served by the API.
fn seed_initial_user(store: &dyn Store) -> Result<(), CliError> {
    let token = auth::generate_token();
    let mut record = Record::with_attributes(
        "users",
        [
            ("full_name", "Administrator"),
            ("description", "Seed user"),
        ],
    );
    record.attributes.set(auth::TOKEN_ATTRIBUTE, token.clone());
    record
        .attributes
        .set("password_digest", auth::hash_password("password")?);

    let saved = store.save(record);
    tracing::info!(id = ?saved.id, %token, "seeded initial user");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_seed_creates_a_user_with_token() {
        let store = MemoryStore::new();
        seed_initial_user(&store).unwrap();

        assert_eq!(store.count("users"), 1);
        let user = store.find("users", 1).unwrap();
        let token = user.attributes.get("token").unwrap().as_str().unwrap();
        assert!(auth::user_for_token(&store, token).is_some());
    }
}
