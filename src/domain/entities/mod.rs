//! Core domain entities.
//!
//! The service has a single entity, [`Link`], plus the [`NewLink`] insert
//! payload. Entities are plain data structures without business logic.

pub mod link;

pub use link::{Link, NewLink};
