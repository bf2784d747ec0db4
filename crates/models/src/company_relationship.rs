use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::company_master;
use crate::enums::{RelationshipStatus, RelationshipType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_relationship")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_relationship_id: String,
    pub from_company_id: String,
    pub to_company_id: String,
    pub relationship_type: RelationshipType,
    pub relationship_status: RelationshipStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// Both ends point at `company_master`, so there is no single `Related` impl;
// callers load the two companies by id.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { FromCompany, ToCompany }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::FromCompany => Entity::belongs_to(company_master::Entity)
                .from(Column::FromCompanyId)
                .to(company_master::Column::CompanyId)
                .into(),
            Relation::ToCompany => Entity::belongs_to(company_master::Entity)
                .from(Column::ToCompanyId)
                .to(company_master::Column::CompanyId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
