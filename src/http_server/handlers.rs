//! # Resource Handlers
//!
//! The five per-collection operations. Every mutating handler runs its
//! guard chain first; requests that fail a guard never reach the handler
//! logic below it. Lookups go through the resolver, so "not found" always
//! arrives here as a structured error.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth;
use crate::jsonapi::{
    CollectionDocument, ErrorDocument, RequestDocument, SingleDocument, MEDIA_TYPE,
};
use crate::resource::{ResourceType, SaveContext};
use crate::store::Record;

use super::errors::{ApiError, ApiResult};
use super::guards::{self, Guard, GuardContext};
use super::pagination;
use super::resolver;
use super::server::AppState;

/// Guard chains per operation. Operations absent from this table run no
/// guards at all.
const CREATE_GUARDS: &[Guard] = &[Guard::ContentType, Guard::ResourceType, Guard::ApiKey];
const UPDATE_GUARDS: &[Guard] = &[Guard::ContentType, Guard::ResourceType, Guard::ApiKey];
const DELETE_GUARDS: &[Guard] = &[Guard::ApiKey];

/// GET /{collection}
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let resource = lookup(&state, &collection)?;
    let records = state.store.all(resource.name);
    let total = records.len();
    let page = pagination::requested_page(&query);

    let document = CollectionDocument::new(
        pagination::slice(&records, page),
        resource,
        pagination::meta(total),
        pagination::links(resource.name, page, total),
    );
    Ok(document_response(StatusCode::OK, &document))
}

/// GET /{collection}/{id}
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let resource = lookup(&state, &collection)?;
    let record = resolver::resolve(state.store.as_ref(), resource.name, &id)?;
    Ok(document_response(
        StatusCode::OK,
        &SingleDocument::new(&record, resource),
    ))
}

/// POST /{collection}
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let resource = lookup(&state, &collection)?;
    let document = RequestDocument::parse(&body);
    run_guards(CREATE_GUARDS, &Method::POST, &headers, &document, resource, &state)?;

    let mut record = Record::new(resource.name);
    record.attributes = document.attributes();

    let errors = resource.validate(&record, SaveContext::Create);
    if !errors.is_empty() {
        record.errors = errors;
        return Err(ApiError::Validation(ErrorDocument::from_record(&record)));
    }

    if resource.secure_password {
        auth::digest_password(&mut record)?;
        record
            .attributes
            .set(auth::TOKEN_ATTRIBUTE, auth::generate_token());
    }

    let saved = state.store.save(record);
    Ok(document_response(
        StatusCode::CREATED,
        &SingleDocument::new(&saved, resource),
    ))
}

/// PUT/PATCH /{collection}/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let resource = lookup(&state, &collection)?;
    let document = RequestDocument::parse(&body);
    run_guards(UPDATE_GUARDS, &method, &headers, &document, resource, &state)?;

    let mut record = resolver::resolve(state.store.as_ref(), resource.name, &id)?;
    record.attributes.merge(&document.attributes());

    let errors = resource.validate(&record, SaveContext::Update);
    if !errors.is_empty() {
        record.errors = errors;
        return Err(ApiError::Validation(ErrorDocument::from_record(&record)));
    }

    if resource.secure_password {
        auth::digest_password(&mut record)?;
    }

    let saved = state.store.save(record);
    Ok(document_response(
        StatusCode::OK,
        &SingleDocument::new(&saved, resource),
    ))
}

/// DELETE /{collection}/{id}
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let resource = lookup(&state, &collection)?;
    run_guards(
        DELETE_GUARDS,
        &Method::DELETE,
        &headers,
        &RequestDocument::default(),
        resource,
        &state,
    )?;

    let record = resolver::resolve(state.store.as_ref(), resource.name, &id)?;
    if let Some(record_id) = record.id {
        state.store.delete(resource.name, record_id);
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn lookup<'a>(state: &'a AppState, collection: &str) -> ApiResult<&'a ResourceType> {
    state
        .registry
        .get(collection)
        .ok_or_else(|| ApiError::UnknownCollection(collection.to_string()))
}

fn run_guards(
    chain: &[Guard],
    method: &Method,
    headers: &HeaderMap,
    document: &RequestDocument,
    resource: &ResourceType,
    state: &AppState,
) -> ApiResult<()> {
    let ctx = GuardContext {
        method,
        content_type: header_str(headers, header::CONTENT_TYPE.as_str()),
        api_key: header_str(headers, "x-api-key"),
        body_type: document.resource_type(),
        route_type: resource.name,
        store: state.store.as_ref(),
    };
    guards::run(chain, &ctx)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Serialize a document with the JSON:API content type.
fn document_response<T: Serialize>(status: StatusCode, document: &T) -> Response {
    (status, [(header::CONTENT_TYPE, MEDIA_TYPE)], Json(document)).into_response()
}
