//! Cache backends.
//!
//! Implementations of the [`goodstack_core::cache::Cache`] trait:
//!
//! - [`RedisCache`] -- the production backend.
//! - [`MemoryCache`] -- in-process backend for tests and local development.

pub mod memory;
pub mod redis_impl;

pub use memory::MemoryCache;
pub use redis_impl::RedisCache;
