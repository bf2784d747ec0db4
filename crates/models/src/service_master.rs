use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::enums::ServiceStatus;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_master")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: String,
    pub service_name: String,
    pub service_description: Option<String>,
    pub service_status: ServiceStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    status: ServiceStatus,
) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("service name required".into())); }
    let am = ActiveModel {
        service_id: Set(Uuid::new_v4().to_string()),
        service_name: Set(name.to_string()),
        service_description: Set(description.map(str::to_string)),
        service_status: Set(status),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
