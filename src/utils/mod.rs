//! Helpers used by the link service and the HTTP layer.
//!
//! - [`slug`] - Slug generation and validation
//! - [`url_validator`] - Destination URL validation

pub mod slug;
pub mod url_validator;
