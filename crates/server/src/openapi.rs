use utoipa::OpenApi;
use utoipa::ToSchema;
use serde::Deserialize;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationshipDoc {
    pub from_company_id: String,
    pub to_company_id: String,
    /// MERCHANT_SUPPLIER, BROKER_SUPPLIER or PARTNER
    pub relationship_type: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelationshipDoc {
    /// ACTIVE, INACTIVE or PENDING
    pub relationship_status: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetServiceDoc {
    pub company_id: String,
    pub service_id: String,
    pub is_enabled: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::relationships::list,
        crate::routes::relationships::create,
        crate::routes::relationships::get,
        crate::routes::relationships::update,
        crate::routes::relationships::delete,
        crate::routes::services::list,
        crate::routes::services::set,
        crate::routes::session::current,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CreateRelationshipDoc,
            UpdateRelationshipDoc,
            SetServiceDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "relationships"),
        (name = "services"),
        (name = "session")
    )
)]
pub struct ApiDoc;
