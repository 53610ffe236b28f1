//! Replication into the analytical store.
//!
//! [`ReplicationConsumer`] subscribes to the mutation bus and copies every
//! received event into the analytical database. It runs as a long-lived
//! background task for the lifetime of the process and shuts down
//! gracefully when the bus sender is dropped.
//!
//! Failure policy: a batch insert that fails is logged and the event is
//! dropped -- no retry, no dead-letter. The primary store stays
//! authoritative; the analytical copy tolerates gaps and duplicates.

use goodstack_core::created_at::CreatedAtShift;
use goodstack_db::repositories::ArchiveRepo;
use goodstack_db::DbPool;
use tokio::sync::broadcast;

use crate::bus::GoodsMutation;

/// Background service that persists mutation events to the analytical store.
pub struct ReplicationConsumer;

impl ReplicationConsumer {
    /// Run the consumer loop.
    ///
    /// Receives from the bus via `receiver`, applies the `created_at`
    /// shift, and batch-inserts each event's rows in one transaction.
    /// Exits when the channel closes (the [`EventBus`](crate::bus::EventBus)
    /// was dropped during shutdown).
    pub async fn run(
        pool: DbPool,
        mut receiver: broadcast::Receiver<GoodsMutation>,
        shift: CreatedAtShift,
    ) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let rows = event.goods.len();
                    match ArchiveRepo::insert_batch(&pool, &event.goods, &shift).await {
                        Ok(inserted) => {
                            tracing::debug!(rows = inserted, "Replicated mutation event");
                        }
                        Err(e) => {
                            tracing::error!(
                                error = %e,
                                rows,
                                "Failed to replicate mutation event, dropping it"
                            );
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Replication consumer lagged, events were dropped"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Mutation bus closed, replication consumer shutting down");
                    break;
                }
            }
        }
    }
}
