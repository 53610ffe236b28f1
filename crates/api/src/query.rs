//! Shared query parameter types for API handlers.

use goodstack_core::types::DbId;
use serde::Deserialize;

/// Listing window (`?limit=&offset=`).
///
/// `offset` is the first good id of the window (ids are sequential);
/// `limit` is clamped to the total row count by the read path.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<DbId>,
}

/// Project scope for operations addressed by good id (`?project_id=`).
#[derive(Debug, Deserialize)]
pub struct ProjectScope {
    pub project_id: DbId,
}
