use crate::cache::CacheError;
use crate::types::DbId;

/// Domain error for catalog operations.
///
/// The not-found variants are distinct so callers can branch on them
/// without inspecting message strings. `Storage` and `Cache` carry their
/// sources for logging; at the HTTP boundary both map to a 500-class
/// outcome.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("good {id} not found in project {project_id}")]
    GoodNotFound { id: DbId, project_id: DbId },

    #[error("project {id} not found")]
    ProjectNotFound { id: DbId },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl CatalogError {
    /// Whether this error means an entity was absent, as opposed to an
    /// infrastructure failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::GoodNotFound { .. } | CatalogError::ProjectNotFound { .. }
        )
    }
}
