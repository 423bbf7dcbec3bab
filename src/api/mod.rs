//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Error redaction, rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
