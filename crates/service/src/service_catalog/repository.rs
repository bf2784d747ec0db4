use async_trait::async_trait;

use models::{company_service, service_master};

use crate::errors::ServiceError;

/// Persistence for the service catalog and per-company overrides.
#[async_trait]
pub trait ServiceCatalogRepository: Send + Sync {
    /// ACTIVE catalog entries sorted by name.
    async fn list_active_services(&self) -> Result<Vec<service_master::Model>, ServiceError>;
    async fn list_company_overrides(&self, company_id: &str) -> Result<Vec<company_service::Model>, ServiceError>;
    async fn company_exists(&self, company_id: &str) -> Result<bool, ServiceError>;
    async fn find_service(&self, service_id: &str) -> Result<Option<service_master::Model>, ServiceError>;
    /// Insert or update the (company, service) row in a single statement.
    async fn upsert(&self, company_id: &str, service_id: &str, is_enabled: bool) -> Result<company_service::Model, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};

    use chrono::Utc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use models::enums::ServiceStatus;

    #[derive(Default)]
    struct State {
        companies: HashSet<String>,
        services: HashMap<String, service_master::Model>,
        overrides: HashMap<(String, String), company_service::Model>, // key: (company_id, service_id)
    }

    #[derive(Default)]
    pub struct MockServiceCatalogRepository {
        state: RwLock<State>,
    }

    impl MockServiceCatalogRepository {
        pub async fn add_company(&self, company_id: &str) {
            self.state.write().await.companies.insert(company_id.into());
        }

        pub async fn add_service(&self, service_id: &str, name: &str, status: ServiceStatus) {
            let m = service_master::Model {
                service_id: service_id.into(),
                service_name: name.into(),
                service_description: None,
                service_status: status,
            };
            self.state.write().await.services.insert(service_id.into(), m);
        }

        pub async fn override_count(&self) -> usize {
            self.state.read().await.overrides.len()
        }
    }

    #[async_trait]
    impl ServiceCatalogRepository for MockServiceCatalogRepository {
        async fn list_active_services(&self) -> Result<Vec<service_master::Model>, ServiceError> {
            let st = self.state.read().await;
            let mut out: Vec<_> =
                st.services.values().filter(|s| s.service_status == ServiceStatus::Active).cloned().collect();
            out.sort_by(|a, b| a.service_name.cmp(&b.service_name));
            Ok(out)
        }

        async fn list_company_overrides(&self, company_id: &str) -> Result<Vec<company_service::Model>, ServiceError> {
            let st = self.state.read().await;
            Ok(st.overrides.values().filter(|o| o.company_id == company_id).cloned().collect())
        }

        async fn company_exists(&self, company_id: &str) -> Result<bool, ServiceError> {
            Ok(self.state.read().await.companies.contains(company_id))
        }

        async fn find_service(&self, service_id: &str) -> Result<Option<service_master::Model>, ServiceError> {
            Ok(self.state.read().await.services.get(service_id).cloned())
        }

        async fn upsert(&self, company_id: &str, service_id: &str, is_enabled: bool) -> Result<company_service::Model, ServiceError> {
            let mut st = self.state.write().await;
            let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
            let row = st
                .overrides
                .entry((company_id.to_string(), service_id.to_string()))
                .and_modify(|r| {
                    r.is_enabled = is_enabled;
                    r.updated_at = now;
                })
                .or_insert_with(|| company_service::Model {
                    company_service_id: Uuid::new_v4().to_string(),
                    company_id: company_id.into(),
                    service_id: service_id.into(),
                    is_enabled,
                    created_at: now,
                    updated_at: now,
                });
            Ok(row.clone())
        }
    }
}
