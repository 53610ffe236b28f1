//! Mutation event pipeline.
//!
//! - [`EventBus`] -- publish/subscribe hub backed by `tokio::sync::broadcast`.
//!   Every committed goods mutation is published here exactly once by the
//!   write path, fire-and-forget.
//! - [`GoodsMutation`] -- the event envelope carrying the post-mutation rows.
//! - [`ReplicationConsumer`] -- long-lived subscriber that copies every
//!   event into the analytical store.

pub mod bus;
pub mod replication;

pub use bus::{EventBus, GoodsMutation, GOODS_SUBJECT};
pub use replication::ReplicationConsumer;
