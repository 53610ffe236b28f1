//! Repository for the analytical store's append-only `goods` table.

use goodstack_core::created_at::CreatedAtShift;
use sqlx::PgPool;

use crate::models::good::Good;

/// Batch writer for replicated goods records.
///
/// The table has no dedup key: replaying an event appends one row per
/// record per replay. Delivery is at-least-once upstream, and duplicates
/// are an accepted property of the analytical copy.
pub struct ArchiveRepo;

impl ArchiveRepo {
    /// Insert every record of a mutation event in one transaction,
    /// applying the `created_at` shift to each row. Any failure aborts
    /// the whole batch.
    pub async fn insert_batch(
        pool: &PgPool,
        goods: &[Good],
        shift: &CreatedAtShift,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for good in goods {
            sqlx::query(
                "INSERT INTO goods (id, project_id, name, description, priority, removed, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(good.id)
            .bind(good.project_id)
            .bind(&good.name)
            .bind(&good.description)
            .bind(good.priority)
            .bind(good.removed)
            .bind(shift.apply(good.created_at))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(goods.len() as u64)
    }
}
