use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::enums::CompanyType;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_master")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: String,
    pub company_name: String,
    pub company_type: CompanyType,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("company name required".into())); }
    if name.len() > 255 { return Err(errors::ModelError::Validation("company name too long (<=255)".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str, company_type: CompanyType) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        company_id: Set(Uuid::new_v4().to_string()),
        company_name: Set(name.trim().to_string()),
        company_type: Set(company_type),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
