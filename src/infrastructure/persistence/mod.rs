//! Link repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage used by the server
//! - [`MemoryLinkRepository`] - in-process storage for tests and local tooling

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
