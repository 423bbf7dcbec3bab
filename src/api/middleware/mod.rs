//! HTTP middleware for request processing and protection.
//!
//! Provides error stack redaction, rate limiting, and request tracing.

pub mod error_stack;
pub mod rate_limit;
pub mod tracing;
