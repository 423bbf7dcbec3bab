//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;

pub use health::health_handler;
pub use links::create_link_handler;
pub use redirect::{redirect_handler, url_slug_redirect_handler};
