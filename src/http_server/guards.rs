//! # Request Guards
//!
//! The ordered chain of pre-handler checks. Each operation declares the
//! guards that apply to it; the dispatcher runs them in order and stops at
//! the first failure. Guards not listed for an operation are never
//! evaluated.
//!
//! Order is fixed: content type (406), resource type (409), API key (403).
//! The resolver runs after the chain, in the handler.

use axum::http::Method;

use crate::auth;
use crate::jsonapi::MEDIA_TYPE;
use crate::store::Store;

use super::errors::ApiError;

/// One pre-handler check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Mutating requests must carry the JSON:API content type.
    ContentType,
    /// `data.type` in the body must equal the route's resource type.
    ResourceType,
    /// `X-Api-Key` must match some user's token.
    ApiKey,
}

/// Everything a guard may inspect.
pub struct GuardContext<'a> {
    pub method: &'a Method,
    /// Raw `Content-Type` header value.
    pub content_type: Option<&'a str>,
    /// Raw `X-Api-Key` header value.
    pub api_key: Option<&'a str>,
    /// `data.type` from the parsed request body.
    pub body_type: Option<&'a str>,
    /// Resource type implied by the route.
    pub route_type: &'a str,
    pub store: &'a dyn Store,
}

/// Run a guard chain. The first failing guard short-circuits; the caller
/// turns the error into an empty-bodied terminal response.
pub fn run(guards: &[Guard], ctx: &GuardContext<'_>) -> Result<(), ApiError> {
    for guard in guards {
        match guard {
            Guard::ContentType => check_content_type(ctx)?,
            Guard::ResourceType => check_resource_type(ctx)?,
            Guard::ApiKey => check_api_key(ctx)?,
        }
    }
    Ok(())
}

/// The media type of a `Content-Type` header value, parameters stripped.
fn media_type(value: &str) -> &str {
    value.split(';').next().unwrap_or(value).trim()
}

fn check_content_type(ctx: &GuardContext<'_>) -> Result<(), ApiError> {
    // GET and DELETE are exempt.
    if !matches!(ctx.method.as_str(), "POST" | "PUT" | "PATCH") {
        return Ok(());
    }
    match ctx.content_type {
        Some(value) if media_type(value) == MEDIA_TYPE => Ok(()),
        _ => Err(ApiError::NotAcceptable),
    }
}

fn check_resource_type(ctx: &GuardContext<'_>) -> Result<(), ApiError> {
    // A missing data.type counts as a mismatch, not a parse failure.
    match ctx.body_type {
        Some(kind) if kind == ctx.route_type => Ok(()),
        _ => Err(ApiError::TypeMismatch),
    }
}

fn check_api_key(ctx: &GuardContext<'_>) -> Result<(), ApiError> {
    let token = ctx.api_key.ok_or(ApiError::Forbidden)?;
    match auth::user_for_token(ctx.store, token) {
        Some(_) => Ok(()),
        None => Err(ApiError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Record};

    fn store_with_token(token: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store.save(Record::with_attributes(
            "users",
            [("full_name", "Bob"), ("token", token)],
        ));
        store
    }

    fn ctx<'a>(
        method: &'a Method,
        content_type: Option<&'a str>,
        api_key: Option<&'a str>,
        body_type: Option<&'a str>,
        store: &'a MemoryStore,
    ) -> GuardContext<'a> {
        GuardContext {
            method,
            content_type,
            api_key,
            body_type,
            route_type: "users",
            store,
        }
    }

    const ALL: &[Guard] = &[Guard::ContentType, Guard::ResourceType, Guard::ApiKey];

    #[test]
    fn test_wrong_content_type_fails_406() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(&method, Some("application/json"), Some("t"), Some("users"), &store);
        assert!(matches!(run(ALL, &ctx), Err(ApiError::NotAcceptable)));
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(
            &method,
            Some("application/vnd.api+json; charset=utf-8"),
            Some("t"),
            Some("users"),
            &store,
        );
        assert!(run(ALL, &ctx).is_ok());
    }

    #[test]
    fn test_get_is_exempt_from_content_type() {
        let store = store_with_token("t");
        let method = Method::GET;
        let ctx = ctx(&method, None, Some("t"), Some("users"), &store);
        assert!(run(&[Guard::ContentType], &ctx).is_ok());
    }

    #[test]
    fn test_type_mismatch_fails_409_before_auth() {
        // Wrong body type and no API key at all: the type guard wins.
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(
            &method,
            Some("application/vnd.api+json"),
            None,
            Some("posts"),
            &store,
        );
        assert!(matches!(run(ALL, &ctx), Err(ApiError::TypeMismatch)));
    }

    #[test]
    fn test_missing_body_type_is_a_mismatch() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(&method, Some("application/vnd.api+json"), Some("t"), None, &store);
        assert!(matches!(run(ALL, &ctx), Err(ApiError::TypeMismatch)));
    }

    #[test]
    fn test_missing_api_key_fails_403() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(&method, Some("application/vnd.api+json"), None, Some("users"), &store);
        assert!(matches!(run(ALL, &ctx), Err(ApiError::Forbidden)));
    }

    #[test]
    fn test_unknown_api_key_fails_403() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(
            &method,
            Some("application/vnd.api+json"),
            Some("0000"),
            Some("users"),
            &store,
        );
        assert!(matches!(run(ALL, &ctx), Err(ApiError::Forbidden)));
    }

    #[test]
    fn test_all_guards_pass() {
        let store = store_with_token("t");
        let method = Method::POST;
        let ctx = ctx(
            &method,
            Some("application/vnd.api+json"),
            Some("t"),
            Some("users"),
            &store,
        );
        assert!(run(ALL, &ctx).is_ok());
    }

    #[test]
    fn test_unlisted_guards_are_skipped() {
        // Delete has no content-type guard: a bogus content type passes.
        let store = store_with_token("t");
        let method = Method::DELETE;
        let ctx = ctx(&method, Some("text/plain"), Some("t"), None, &store);
        assert!(run(&[Guard::ApiKey], &ctx).is_ok());
    }
}
