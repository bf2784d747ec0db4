use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::enums::AssignmentStatus;
use crate::{company_relationship, designation, errors, user_master};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_company_assignment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub assignment_id: String,
    pub user_id: String,
    pub company_relationship_id: String,
    pub designation_id: Option<String>,
    pub assignment_status: AssignmentStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, CompanyRelationship, Designation }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user_master::Entity)
                .from(Column::UserId)
                .to(user_master::Column::UserId)
                .into(),
            Relation::CompanyRelationship => Entity::belongs_to(company_relationship::Entity)
                .from(Column::CompanyRelationshipId)
                .to(company_relationship::Column::CompanyRelationshipId)
                .into(),
            Relation::Designation => Entity::belongs_to(designation::Entity)
                .from(Column::DesignationId)
                .to(designation::Column::DesignationId)
                .into(),
        }
    }
}

impl Related<user_master::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<designation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Designation.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Assign a user to a relationship as ACTIVE.
pub async fn create(
    db: &DatabaseConnection,
    user_id: &str,
    company_relationship_id: &str,
    designation_id: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        assignment_id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        company_relationship_id: Set(company_relationship_id.to_string()),
        designation_id: Set(designation_id.map(str::to_string)),
        assignment_status: Set(AssignmentStatus::Active),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
