use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use service::service_catalog::domain::{CompanyServiceView, ServiceListing, SetServiceInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ServicesQuery {
    /// Merge this company's enablement flags into the listing
    pub company_id: Option<String>,
}

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    params(ServicesQuery),
    responses(
        (status = 200, description = "Active services by name; isEnabled merged when companyId is given"),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ServicesQuery>) -> Result<Json<Vec<ServiceListing>>, ApiError> {
    Ok(Json(state.services.list(q.company_id.as_deref()).await?))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::SetServiceDoc,
    responses(
        (status = 200, description = "Stored enablement row with the service embedded"),
        (status = 400, description = "Missing or invalid fields", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Company or service not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn set(
    State(state): State<AppState>,
    body: Result<Json<SetServiceInput>, JsonRejection>,
) -> Result<Json<CompanyServiceView>, ApiError> {
    let Json(input) = body?;
    Ok(Json(state.services.set_enabled(input).await?))
}
