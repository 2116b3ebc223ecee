//! aviary - A small JSON:API-compliant CRUD backend
//!
//! `users` and `posts` over HTTP with API-key authentication, content-type
//! negotiation, and page-number pagination. Persistence sits behind the
//! [`store::Store`] trait; the HTTP layer is a guard chain, a resolver,
//! and five handlers per collection.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod jsonapi;
pub mod resource;
pub mod store;
