//! Good entity model and DTOs.

use goodstack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A good row from the `goods` table.
///
/// Also the wire shape of a replicated record: the serde derives define
/// the JSON carried inside a mutation event and cached under `goods_<id>`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Good {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
    /// Soft-delete flag. A removed good stays addressable by id but is
    /// excluded from active semantics (priority ordering, max-priority).
    pub removed: bool,
    pub created_at: Timestamp,
}

/// Insert payload assembled by the write path (priority already resolved).
#[derive(Debug, Clone)]
pub struct NewGood {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
}

/// DTO for creating a good.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGood {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for renaming a good / changing its description.
///
/// `description: None` means "no change requested"; `Some("")` is an
/// explicit empty string and is written as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGood {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for relocating a good within its project's priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReprioritizeGood {
    pub project_id: DbId,
    pub new_priority: i32,
}
