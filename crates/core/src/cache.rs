//! Cache capability trait.
//!
//! The cache is a pure performance layer in front of the primary store:
//! absence of a key is never authoritative, and every value it holds also
//! exists (or recently existed) in the store. Implementations live in
//! `goodstack-cache`; orchestrators depend only on this trait so tests can
//! substitute an in-memory backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::DbId;

/// TTL applied when the read path backfills a missed entry.
pub const BACKFILL_TTL: Duration = Duration::from_secs(60);

/// Cache key for a good, shared by the read and write paths.
pub fn goods_key(id: DbId) -> String {
    format!("goods_{id}")
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    Connection(String),

    #[error("cache operation failed: {0}")]
    Operation(String),
}

/// Byte-level cache over string keys.
///
/// `get` returns `Ok(None)` on a miss; errors are reserved for backend
/// failures. Values are opaque bytes -- serialization is the caller's
/// concern.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
