//! Handlers for the `/goods` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use goodstack_core::types::DbId;
use goodstack_db::models::good::{CreateGood, Good, ReprioritizeGood, UpdateGood};

use crate::error::{validation_error, AppError, AppResult};
use crate::query::{ListParams, ProjectScope};
use crate::state::AppState;

/// Listing envelope: the window's rows plus counters about the window.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub meta: ListMeta,
    pub goods: Vec<Good>,
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: usize,
    pub removed: usize,
    pub limit: i64,
    pub offset: DbId,
}

/// POST /api/v1/goods
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGood>,
) -> AppResult<(StatusCode, Json<Good>)> {
    input.validate().map_err(validation_error)?;
    let good = state.goods.create(&input).await?;
    Ok((StatusCode::CREATED, Json(good)))
}

/// GET /api/v1/goods?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse>> {
    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(1);
    if limit < 1 || offset < 1 {
        return Err(AppError::BadRequest(
            "limit and offset must be positive".into(),
        ));
    }

    let goods = state.goods.list(limit, offset).await?;
    let removed = goods.iter().filter(|g| g.removed).count();

    Ok(Json(ListResponse {
        meta: ListMeta {
            total: goods.len(),
            removed,
            limit,
            offset,
        },
        goods,
    }))
}

/// PATCH /api/v1/goods/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGood>,
) -> AppResult<Json<Good>> {
    input.validate().map_err(validation_error)?;
    let good = state.goods.update(id, &input).await?;
    Ok(Json(good))
}

/// DELETE /api/v1/goods/{id}?project_id=
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Good>> {
    let good = state.goods.remove(id, scope.project_id).await?;
    Ok(Json(good))
}

/// PATCH /api/v1/goods/{id}/reprioritize
///
/// Returns the project's active goods in post-reordering priority order,
/// the same set carried by the published mutation event.
pub async fn reprioritize(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReprioritizeGood>,
) -> AppResult<Json<Vec<Good>>> {
    let goods = state
        .goods
        .reprioritize(id, input.project_id, input.new_priority)
        .await?;
    Ok(Json(goods))
}
