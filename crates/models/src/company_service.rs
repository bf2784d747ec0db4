use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{company_master, service_master};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_service_id: String,
    pub company_id: String,
    pub service_id: String,
    pub is_enabled: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company, Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company_master::Entity)
                .from(Column::CompanyId)
                .to(company_master::Column::CompanyId)
                .into(),
            Relation::Service => Entity::belongs_to(service_master::Entity)
                .from(Column::ServiceId)
                .to(service_master::Column::ServiceId)
                .into(),
        }
    }
}

impl Related<service_master::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}
