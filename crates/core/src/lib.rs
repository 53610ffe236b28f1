//! Shared domain building blocks for the goods catalog.
//!
//! - [`types`] -- id and timestamp aliases used across the workspace.
//! - [`error`] -- the domain error taxonomy ([`error::CatalogError`]).
//! - [`cache`] -- the byte-level cache capability trait and key helpers.
//! - [`created_at`] -- the timestamp-alignment transform applied by the
//!   replication consumer.

pub mod cache;
pub mod created_at;
pub mod error;
pub mod types;

pub use cache::{Cache, CacheError};
pub use created_at::CreatedAtShift;
pub use error::CatalogError;
