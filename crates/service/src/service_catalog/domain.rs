use serde::{Deserialize, Serialize};

use models::{company_service, service_master};

/// A catalog entry, optionally merged with one company's enablement flag.
/// `is_enabled` is omitted entirely when no company was asked about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    #[serde(flatten)]
    pub service: service_master::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// Upsert body. `is_enabled` stays loosely typed so a non-boolean is a
/// validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetServiceInput {
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<serde_json::Value>,
}

/// The stored enablement row with its service embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyServiceView {
    #[serde(flatten)]
    pub record: company_service::Model,
    pub service: service_master::Model,
}
