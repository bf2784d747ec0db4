use serde::{Deserialize, Serialize};

use models::enums::{AssignmentStatus, CompanyType};
use models::{company_master, company_relationship, designation, user_master};

/// Create request body. Every field is optional so missing values surface as
/// a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationshipInput {
    #[serde(default)]
    pub from_company_id: Option<String>,
    #[serde(default)]
    pub to_company_id: Option<String>,
    #[serde(default)]
    pub relationship_type: Option<String>,
}

/// Update request body; only the status may change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelationshipInput {
    #[serde(default)]
    pub relationship_status: Option<String>,
}

/// Company as embedded in relationship responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub company_id: String,
    pub company_name: String,
    pub company_type: CompanyType,
}

impl From<company_master::Model> for CompanySummary {
    fn from(m: company_master::Model) -> Self {
        Self { company_id: m.company_id, company_name: m.company_name, company_type: m.company_type }
    }
}

/// A relationship row with both companies resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipWithCompanies {
    #[serde(flatten)]
    pub relationship: company_relationship::Model,
    pub from_company: CompanySummary,
    pub to_company: CompanySummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipCounts {
    pub user_company_assignments: u64,
}

/// List entry: relationship, companies, and the number of user assignments.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipListItem {
    #[serde(flatten)]
    pub relationship: RelationshipWithCompanies,
    #[serde(rename = "_count")]
    pub count: RelationshipCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl From<user_master::Model> for AssignedUser {
    fn from(m: user_master::Model) -> Self {
        Self { user_id: m.user_id, name: m.name, email: m.email }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignationSummary {
    pub designation_id: String,
    pub designation_name: String,
}

impl From<designation::Model> for DesignationSummary {
    fn from(m: designation::Model) -> Self {
        Self { designation_id: m.designation_id, designation_name: m.designation_name }
    }
}

/// One user assignment under a relationship, with user and designation resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetail {
    pub assignment_id: String,
    pub assignment_status: AssignmentStatus,
    pub user: AssignedUser,
    pub designation: Option<DesignationSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDetail {
    #[serde(flatten)]
    pub relationship: RelationshipWithCompanies,
    pub user_company_assignments: Vec<AssignmentDetail>,
}

/// Result of a soft delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeleteOutcome {
    pub message: String,
    pub relationship: company_relationship::Model,
    pub deactivated_assignments: u64,
}
