//! Primary-store capability seam.

use async_trait::async_trait;
use goodstack_core::types::DbId;
use goodstack_db::models::good::{Good, NewGood};
use goodstack_db::repositories::{GoodRepo, ProjectRepo};
use goodstack_db::DbPool;

/// Operations the orchestrators need from the system of record.
///
/// The production implementation is [`PgGoodStore`]; tests substitute an
/// in-memory fake. Errors are `sqlx::Error` so the seam stays aligned
/// with the repository layer.
#[async_trait]
pub trait GoodStore: Send + Sync {
    async fn project_exists(&self, project_id: DbId) -> Result<bool, sqlx::Error>;

    async fn max_priority(&self, project_id: DbId) -> Result<i32, sqlx::Error>;

    async fn insert(&self, input: &NewGood) -> Result<Good, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Good>, sqlx::Error>;

    async fn update_name_desc(
        &self,
        id: DbId,
        project_id: DbId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Good>, sqlx::Error>;

    async fn mark_removed(&self, id: DbId, project_id: DbId) -> Result<Option<Good>, sqlx::Error>;

    /// Transactional priority relocation; `None` when no row matches
    /// `(id, project_id)`. See [`GoodRepo::reprioritize`] for the
    /// shift-then-assign algorithm and its no-duplicate invariant.
    async fn reprioritize(
        &self,
        new_priority: i32,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Vec<Good>>, sqlx::Error>;

    async fn count(&self) -> Result<i64, sqlx::Error>;

    async fn max_id(&self) -> Result<Option<DbId>, sqlx::Error>;
}

/// PostgreSQL-backed store delegating to the repository layer.
pub struct PgGoodStore {
    pool: DbPool,
}

impl PgGoodStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoodStore for PgGoodStore {
    async fn project_exists(&self, project_id: DbId) -> Result<bool, sqlx::Error> {
        ProjectRepo::exists(&self.pool, project_id).await
    }

    async fn max_priority(&self, project_id: DbId) -> Result<i32, sqlx::Error> {
        GoodRepo::max_priority(&self.pool, project_id).await
    }

    async fn insert(&self, input: &NewGood) -> Result<Good, sqlx::Error> {
        GoodRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Good>, sqlx::Error> {
        GoodRepo::find_by_id(&self.pool, id).await
    }

    async fn update_name_desc(
        &self,
        id: DbId,
        project_id: DbId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Good>, sqlx::Error> {
        GoodRepo::update_name_desc(&self.pool, id, project_id, name, description).await
    }

    async fn mark_removed(&self, id: DbId, project_id: DbId) -> Result<Option<Good>, sqlx::Error> {
        GoodRepo::mark_removed(&self.pool, id, project_id).await
    }

    async fn reprioritize(
        &self,
        new_priority: i32,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Vec<Good>>, sqlx::Error> {
        GoodRepo::reprioritize(&self.pool, new_priority, id, project_id).await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        GoodRepo::count(&self.pool).await
    }

    async fn max_id(&self) -> Result<Option<DbId>, sqlx::Error> {
        GoodRepo::max_id(&self.pool).await
    }
}
