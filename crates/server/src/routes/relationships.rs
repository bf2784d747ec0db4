use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::relationship::domain::{
    CreateRelationshipInput, RelationshipDetail, RelationshipListItem, RelationshipWithCompanies, SoftDeleteOutcome,
    UpdateRelationshipInput,
};

use crate::errors::ApiError;
use crate::metrics::RELATIONSHIPS_DEACTIVATED_TOTAL;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/relationships", tag = "relationships",
    responses(
        (status = 200, description = "All relationships, newest first, with companies and assignment counts"),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RelationshipListItem>>, ApiError> {
    let items = state.relationships.list().await?;
    info!(count = items.len(), "list relationships");
    Ok(Json(items))
}

#[utoipa::path(
    post, path = "/api/relationships", tag = "relationships",
    request_body = crate::openapi::CreateRelationshipDoc,
    responses(
        (status = 201, description = "Created with companies embedded"),
        (status = 400, description = "Missing field, invalid type, pairing violation or duplicate", body = crate::openapi::ErrorResponse),
        (status = 404, description = "From or to company not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRelationshipInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RelationshipWithCompanies>), ApiError> {
    let Json(input) = body?;
    let created = state.relationships.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/relationships/{id}", tag = "relationships",
    params(("id" = String, Path, description = "Relationship id")),
    responses(
        (status = 200, description = "Relationship with companies and user assignments"),
        (status = 404, description = "Relationship not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<RelationshipDetail>, ApiError> {
    Ok(Json(state.relationships.get(&id).await?))
}

#[utoipa::path(
    put, path = "/api/relationships/{id}", tag = "relationships",
    params(("id" = String, Path, description = "Relationship id")),
    request_body = crate::openapi::UpdateRelationshipDoc,
    responses(
        (status = 200, description = "Updated relationship with companies"),
        (status = 400, description = "Invalid status", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Relationship not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateRelationshipInput>, JsonRejection>,
) -> Result<Json<RelationshipWithCompanies>, ApiError> {
    let Json(input) = body?;
    Ok(Json(state.relationships.update(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/relationships/{id}", tag = "relationships",
    params(("id" = String, Path, description = "Relationship id")),
    responses(
        (status = 200, description = "Relationship and its active assignments deactivated"),
        (status = 404, description = "Relationship not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<SoftDeleteOutcome>, ApiError> {
    let outcome = state.relationships.soft_delete(&id).await?;
    RELATIONSHIPS_DEACTIVATED_TOTAL.inc();
    Ok(Json(outcome))
}
