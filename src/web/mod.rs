//! Server-rendered HTML pages.
//!
//! - [`not_found`] - Page shown for unknown slugs and unmatched paths

pub mod not_found;
