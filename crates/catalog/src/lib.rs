//! Catalog orchestration.
//!
//! [`GoodService`] sequences every mutation as: primary-store commit →
//! cache invalidation → event publication, and serves listings cache-aside
//! with on-miss backfill. It depends on capability seams -- [`GoodStore`]
//! for the primary store and [`goodstack_core::cache::Cache`] for the
//! cache -- so tests substitute fakes for both.

pub mod service;
pub mod store;

pub use service::GoodService;
pub use store::{GoodStore, PgGoodStore};
