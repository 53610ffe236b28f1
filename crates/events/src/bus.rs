//! In-process mutation bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` between the write path
//! (publisher) and the replication consumer (subscriber). Publication has
//! no transactional coupling to the primary store: the store commit has
//! already happened when an event is published, and a dropped event is
//! accepted (at-most-once, the analytical copy tolerates gaps).

use goodstack_db::models::good::Good;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Subject name all mutation events are published under.
pub const GOODS_SUBJECT: &str = "goods";

/// Envelope carrying the post-mutation rows of one committed write.
///
/// Single-row mutations and batch reorders use the same form: the serde
/// derives pin the wire shape to `{"goods": [...]}` for both producer and
/// consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsMutation {
    pub goods: Vec<Good>,
}

impl GoodsMutation {
    /// Envelope for a single-row mutation.
    pub fn single(good: Good) -> Self {
        Self { goods: vec![good] }
    }

    /// Envelope for a batch mutation (reorder result set).
    pub fn batch(goods: Vec<Good>) -> Self {
        Self { goods }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// Fan-out hub for [`GoodsMutation`] events.
///
/// Any number of subscribers independently receive every published event.
/// When the buffer is full the oldest un-consumed events are dropped and
/// slow receivers observe `RecvError::Lagged`.
pub struct EventBus {
    sender: broadcast::Sender<GoodsMutation>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the send error only means zero receivers.
    pub fn publish(&self, event: GoodsMutation) {
        let _ = self.sender.send(event);
    }

    /// Create a new independent subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<GoodsMutation> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
