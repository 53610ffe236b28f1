//! Repository for the `goods` table.

use goodstack_core::types::DbId;
use sqlx::PgPool;

use crate::models::good::{Good, NewGood};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, priority, removed, created_at";

/// CRUD and priority reordering for goods.
pub struct GoodRepo;

impl GoodRepo {
    /// Highest priority among the active goods of a project, 0 when the
    /// project has none. New goods are created at this value + 1 so they
    /// sort last.
    pub async fn max_priority(pool: &PgPool, project_id: DbId) -> Result<i32, sqlx::Error> {
        let max: Option<i32> = sqlx::query_scalar(
            "SELECT MAX(priority) FROM goods WHERE project_id = $1 AND removed = FALSE",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await?;
        Ok(max.unwrap_or(0))
    }

    /// Insert a new good, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewGood) -> Result<Good, sqlx::Error> {
        let query = format!(
            "INSERT INTO goods (project_id, name, description, priority)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Good>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a good by id. Removed goods stay addressable, so no
    /// `removed` filter here.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Good>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goods WHERE id = $1");
        sqlx::query_as::<_, Good>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update name and description of the good matching `(id, project_id)`.
    ///
    /// `description = None` keeps the stored value (COALESCE); `Some("")`
    /// writes an explicit empty string. Returns `None` if no row matches.
    pub async fn update_name_desc(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Good>, sqlx::Error> {
        let query = format!(
            "UPDATE goods SET
                name = $3,
                description = COALESCE($4, description)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Good>(&query)
            .bind(id)
            .bind(project_id)
            .bind(name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete the good matching `(id, project_id)`.
    ///
    /// Returns the updated row, or `None` if no active row matches (a
    /// second delete of the same good is a not-found, not a no-op).
    pub async fn mark_removed(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Good>, sqlx::Error> {
        let query = format!(
            "UPDATE goods SET removed = TRUE
             WHERE id = $1 AND project_id = $2 AND removed = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Good>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Relocate a good to `new_priority` within its project.
    ///
    /// Runs as one transaction:
    /// 1. lock the target row; `None` if nothing matches `(id, project_id)`;
    /// 2. shift every *other* active good of the project with
    ///    `priority >= new_priority` up by one, so the slot is free and no
    ///    two active rows ever collide after commit;
    /// 3. assign `new_priority` to the target;
    /// 4. re-read the project's active goods ordered by priority -- the
    ///    authoritative post-reordering state returned to the caller.
    pub async fn reprioritize(
        pool: &PgPool,
        new_priority: i32,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Vec<Good>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let target: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM goods WHERE id = $1 AND project_id = $2 FOR UPDATE")
                .bind(id)
                .bind(project_id)
                .fetch_optional(&mut *tx)
                .await?;
        if target.is_none() {
            // Dropping the transaction rolls back the row lock.
            return Ok(None);
        }

        sqlx::query(
            "UPDATE goods SET priority = priority + 1
             WHERE project_id = $1 AND priority >= $2 AND removed = FALSE AND id <> $3",
        )
        .bind(project_id)
        .bind(new_priority)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE goods SET priority = $1 WHERE id = $2 AND project_id = $3")
            .bind(new_priority)
            .bind(id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM goods
             WHERE project_id = $1 AND removed = FALSE
             ORDER BY priority"
        );
        let goods = sqlx::query_as::<_, Good>(&query)
            .bind(project_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(goods))
    }

    /// Total number of goods rows, removed ones included. Used by the
    /// read path to clamp the listing window.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM goods")
            .fetch_one(pool)
            .await
    }

    /// Highest assigned id, `None` when the table is empty. Bounds the
    /// read path's id walk across sparse id ranges.
    pub async fn max_id(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(id) FROM goods")
            .fetch_one(pool)
            .await
    }
}
