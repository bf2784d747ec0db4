use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::enums::ServiceStatus;
use models::{company_master, company_service, service_master};

use crate::errors::ServiceError;
use crate::service_catalog::repository::ServiceCatalogRepository;

pub struct SeaOrmServiceCatalogRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ServiceCatalogRepository for SeaOrmServiceCatalogRepository {
    async fn list_active_services(&self) -> Result<Vec<service_master::Model>, ServiceError> {
        let rows = service_master::Entity::find()
            .filter(service_master::Column::ServiceStatus.eq(ServiceStatus::Active))
            .order_by_asc(service_master::Column::ServiceName)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn list_company_overrides(&self, company_id: &str) -> Result<Vec<company_service::Model>, ServiceError> {
        let rows = company_service::Entity::find()
            .filter(company_service::Column::CompanyId.eq(company_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn company_exists(&self, company_id: &str) -> Result<bool, ServiceError> {
        let n = company_master::Entity::find()
            .filter(company_master::Column::CompanyId.eq(company_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn find_service(&self, service_id: &str) -> Result<Option<service_master::Model>, ServiceError> {
        let res = service_master::Entity::find_by_id(service_id.to_string()).one(&self.db).await?;
        Ok(res)
    }

    async fn upsert(&self, company_id: &str, service_id: &str, is_enabled: bool) -> Result<company_service::Model, ServiceError> {
        let now = Utc::now();
        let am = company_service::ActiveModel {
            company_service_id: Set(Uuid::new_v4().to_string()),
            company_id: Set(company_id.to_string()),
            service_id: Set(service_id.to_string()),
            is_enabled: Set(is_enabled),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        // conflict target is the unique (company_id, service_id) index; id and created_at survive
        let row = company_service::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([company_service::Column::CompanyId, company_service::Column::ServiceId])
                    .update_columns([company_service::Column::IsEnabled, company_service::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;
        Ok(row)
    }
}
