//! Write-path and read-path orchestration for goods.

use std::sync::Arc;

use goodstack_core::cache::{goods_key, Cache, CacheError, BACKFILL_TTL};
use goodstack_core::error::CatalogError;
use goodstack_core::types::DbId;
use goodstack_db::models::good::{CreateGood, Good, NewGood, UpdateGood};
use goodstack_events::{EventBus, GoodsMutation};

use crate::store::GoodStore;

/// Orchestrates goods mutations and listings.
///
/// Every mutation follows the same sequencing contract:
///
/// 1. execute and commit the primary-store change;
/// 2. on success, invalidate the affected cache key(s) -- never before the
///    commit, or a concurrent reader could repopulate the cache with
///    pre-mutation data after a rollback;
/// 3. on success, publish one mutation event with the final row state(s).
///
/// Step 2/3 failures do not roll back step 1. The primary store is
/// authoritative and already committed; cache staleness self-heals on TTL
/// expiry and an unpublished event is an accepted loss.
pub struct GoodService {
    store: Arc<dyn GoodStore>,
    cache: Arc<dyn Cache>,
    bus: Arc<EventBus>,
}

impl GoodService {
    pub fn new(store: Arc<dyn GoodStore>, cache: Arc<dyn Cache>, bus: Arc<EventBus>) -> Self {
        Self { store, cache, bus }
    }

    /// Create a good in a project.
    ///
    /// The project must exist (`ProjectNotFound` otherwise -- checked
    /// before any write, so a failed create inserts nothing and publishes
    /// nothing). The new good sorts last: priority = max active priority
    /// of the project + 1.
    pub async fn create(&self, input: &CreateGood) -> Result<Good, CatalogError> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::Validation("name must not be empty".into()));
        }
        if !self.store.project_exists(input.project_id).await? {
            return Err(CatalogError::ProjectNotFound {
                id: input.project_id,
            });
        }

        let priority = self.store.max_priority(input.project_id).await? + 1;
        let good = self
            .store
            .insert(&NewGood {
                project_id: input.project_id,
                name: input.name.clone(),
                description: input.description.clone(),
                priority,
            })
            .await?;

        self.invalidate(&[good.id]).await;
        self.bus.publish(GoodsMutation::single(good.clone()));
        Ok(good)
    }

    /// Update name and description of a good.
    pub async fn update(&self, id: DbId, input: &UpdateGood) -> Result<Good, CatalogError> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::Validation("name must not be empty".into()));
        }

        let good = self
            .store
            .update_name_desc(id, input.project_id, &input.name, input.description.as_deref())
            .await?
            .ok_or(CatalogError::GoodNotFound {
                id,
                project_id: input.project_id,
            })?;

        self.invalidate(&[id]).await;
        self.bus.publish(GoodsMutation::single(good.clone()));
        Ok(good)
    }

    /// Soft-delete a good. The row stays addressable by id; only the
    /// `removed` flag flips.
    pub async fn remove(&self, id: DbId, project_id: DbId) -> Result<Good, CatalogError> {
        let good = self
            .store
            .mark_removed(id, project_id)
            .await?
            .ok_or(CatalogError::GoodNotFound { id, project_id })?;

        self.invalidate(&[id]).await;
        self.bus.publish(GoodsMutation::single(good.clone()));
        Ok(good)
    }

    /// Relocate a good to a new priority within its project.
    ///
    /// Returns the project's active goods in their post-reordering order.
    /// Every returned row had (or may have had) its priority changed, so
    /// every corresponding cache key is invalidated and all rows travel
    /// in one event.
    pub async fn reprioritize(
        &self,
        id: DbId,
        project_id: DbId,
        new_priority: i32,
    ) -> Result<Vec<Good>, CatalogError> {
        let goods = self
            .store
            .reprioritize(new_priority, id, project_id)
            .await?
            .ok_or(CatalogError::GoodNotFound { id, project_id })?;

        let ids: Vec<DbId> = goods.iter().map(|g| g.id).collect();
        self.invalidate(&ids).await;
        self.bus.publish(GoodsMutation::batch(goods.clone()));
        Ok(goods)
    }

    /// Cache-aside listing paginated by sequential id.
    ///
    /// Walks ids from `offset` upward, serving each from the cache and
    /// backfilling misses from the store with a short TTL. Ids absent
    /// from both (holes left by the BIGSERIAL sequence) are skipped.
    /// `limit` is clamped to the total row count, so the walk never
    /// returns more entries than exist.
    pub async fn list(&self, limit: i64, offset: DbId) -> Result<Vec<Good>, CatalogError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let total = self.store.count().await?;
        let limit = limit.min(total);
        let Some(max_id) = self.store.max_id().await? else {
            return Ok(Vec::new());
        };

        let mut goods = Vec::with_capacity(limit.max(0) as usize);
        let mut id = offset.max(1);

        while (goods.len() as i64) < limit && id <= max_id {
            let key = goods_key(id);
            match self.cache.get(&key).await? {
                Some(bytes) => {
                    let good: Good = serde_json::from_slice(&bytes)
                        .map_err(|e| CacheError::Operation(format!("corrupt cache entry: {e}")))?;
                    goods.push(good);
                }
                None => {
                    if let Some(good) = self.store.find_by_id(id).await? {
                        let bytes = serde_json::to_vec(&good)
                            .map_err(|e| CacheError::Operation(format!("encode failed: {e}")))?;
                        self.cache.set(&key, &bytes, BACKFILL_TTL).await?;
                        goods.push(good);
                    }
                }
            }
            id += 1;
        }

        Ok(goods)
    }

    /// Delete cache keys after a committed mutation.
    ///
    /// A cache failure must not fail the already-committed mutation, so
    /// errors are logged and swallowed. A key that outlives a failed
    /// delete expires on its TTL.
    async fn invalidate(&self, ids: &[DbId]) {
        for id in ids {
            let key = goods_key(*id);
            if let Err(e) = self.cache.delete(&key).await {
                tracing::warn!(error = %e, key = %key, "Cache invalidation failed after commit");
            }
        }
    }
}
