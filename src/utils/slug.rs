//! Slug generation and validation utilities.
//!
//! Generated slugs come from OS entropy encoded with the URL-safe base64
//! alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`). Custom slugs must end in a
//! run of the same characters; anything before that run is accepted.

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Number of characters in a generated slug.
pub const SLUG_LENGTH: usize = 6;

/// Random bytes drawn per slug. 6 bytes encode to 8 characters, of which
/// the first [`SLUG_LENGTH`] are kept.
const SLUG_BYTES: usize = 6;

/// Longest custom slug accepted, counted after trimming.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Trailing run of ASCII word characters and hyphens. Anchored at the end only.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_-]+$").expect("slug regex is valid"));

/// Generates a random short slug.
///
/// No storage lookup is made; a collision is caught by the unique
/// constraint at insert time.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_slug() -> String {
    let mut buffer = [0u8; SLUG_BYTES];
    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut slug = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    slug.truncate(SLUG_LENGTH);
    slug
}

/// Validates a user-provided slug and returns it trimmed.
///
/// Case is preserved here; lowercasing happens right before the insert.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the trimmed slug is longer than
/// [`MAX_SLUG_LENGTH`] characters or does not end with a letter, digit,
/// `_` or `-`.
pub fn validate_slug(input: &str) -> Result<&str, AppError> {
    let slug = input.trim();

    if slug.chars().count() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "slug must be at most 64 characters",
            json!({ "slug": slug }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "slug must end with letters, digits, underscores or hyphens",
            json!({ "slug": slug }),
        ));
    }

    Ok(slug)
}
