//! Destination URL validation.
//!
//! A destination must be an absolute URL with a host. The stored value is
//! the trimmed input as submitted, not a re-serialized form, so it must
//! already be a valid `Location` header value: whitespace and control
//! characters are refused even where `Url::parse` would strip them.

use url::Url;

/// Schemes accepted for destinations.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Longest destination accepted, counted after trimming.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("url is a required field")]
    Missing,

    #[error("url must be at most 2048 characters")]
    TooLong,

    #[error("url must not contain whitespace or control characters")]
    InvalidCharacter,

    #[error("url must be a valid URL")]
    InvalidFormat(#[source] url::ParseError),

    #[error("url must use one of the schemes: http, https, ftp")]
    UnsupportedProtocol,

    #[error("url must include a host")]
    MissingHost,
}

/// Validates a destination URL and returns it trimmed.
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for blank input,
/// [`UrlValidationError::TooLong`] past [`MAX_URL_LENGTH`] characters,
/// [`UrlValidationError::InvalidCharacter`] for embedded whitespace or
/// control characters, [`UrlValidationError::InvalidFormat`] when parsing fails, and
/// [`UrlValidationError::UnsupportedProtocol`] / [`UrlValidationError::MissingHost`]
/// for URLs that parse but cannot be a redirect target.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("  https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_url("not-a-url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if trimmed.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::InvalidCharacter);
    }

    let url = Url::parse(trimmed).map_err(UrlValidationError::InvalidFormat)?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed)
}
