//! # Auth Module
//!
//! API-key authentication and secure-password handling.
//!
//! Authentication is deliberately permissive: an `X-Api-Key` header that
//! matches the `token` attribute of any user authorizes the request. No
//! identity is attached beyond having passed the check, there is no expiry
//! and no scoping.

pub mod crypto;

pub use crypto::{generate_token, hash_password, verify_password, CryptoError};

use crate::store::{AttrValue, Record, Store};

/// Collection holding API users.
pub const USERS_COLLECTION: &str = "users";

/// Attribute carrying a user's API token.
pub const TOKEN_ATTRIBUTE: &str = "token";

/// Consume `password` / `password_confirmation` on a record into an
/// Argon2id `password_digest`.
///
/// Records never keep the plaintext: both attributes are removed even when
/// no digest is produced (blank password on update).
pub fn digest_password(record: &mut Record) -> Result<(), CryptoError> {
    let password = record.attributes.remove("password");
    record.attributes.remove("password_confirmation");

    if let Some(password) = password {
        if !password.is_blank() {
            if let Some(plain) = password.as_str() {
                let digest = hash_password(plain)?;
                record.attributes.set("password_digest", AttrValue::Str(digest));
            }
        }
    }
    Ok(())
}

/// Resolve an API token to the user record holding it.
pub fn user_for_token(store: &dyn Store, token: &str) -> Option<Record> {
    store.find_by(USERS_COLLECTION, TOKEN_ATTRIBUTE, token)
}
