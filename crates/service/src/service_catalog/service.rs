use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{CompanyServiceView, ServiceListing, SetServiceInput};
use super::repository::ServiceCatalogRepository;
use crate::errors::ServiceError;

#[derive(Clone)]
pub struct ServiceCatalog {
    repo: Arc<dyn ServiceCatalogRepository>,
}

impl ServiceCatalog {
    pub fn new(repo: Arc<dyn ServiceCatalogRepository>) -> Self { Self { repo } }

    /// Active services sorted by name. With a company id each entry carries that
    /// company's `is_enabled` flag, `false` when no override exists. An unknown
    /// company is not an error and simply yields every service disabled.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::enums::ServiceStatus;
    /// use service::service_catalog::{ServiceCatalog, repository::mock::MockServiceCatalogRepository};
    /// let repo = Arc::new(MockServiceCatalogRepository::default());
    /// tokio_test::block_on(repo.add_service("s1", "Invoicing", ServiceStatus::Active));
    /// let catalog = ServiceCatalog::new(repo);
    /// let plain = tokio_test::block_on(catalog.list(None)).unwrap();
    /// assert_eq!(plain[0].is_enabled, None);
    /// let merged = tokio_test::block_on(catalog.list(Some("unknown-company"))).unwrap();
    /// assert_eq!(merged[0].is_enabled, Some(false));
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self, company_id: Option<&str>) -> Result<Vec<ServiceListing>, ServiceError> {
        let services = self.repo.list_active_services().await?;
        let Some(company_id) = company_id.map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(services.into_iter().map(|service| ServiceListing { service, is_enabled: None }).collect());
        };

        let enabled: HashMap<String, bool> = self
            .repo
            .list_company_overrides(company_id)
            .await?
            .into_iter()
            .map(|o| (o.service_id, o.is_enabled))
            .collect();
        debug!(company_id, overrides = enabled.len(), "merging company service overrides");

        Ok(services
            .into_iter()
            .map(|service| {
                let is_enabled = enabled.get(&service.service_id).copied().unwrap_or(false);
                ServiceListing { service, is_enabled: Some(is_enabled) }
            })
            .collect())
    }

    /// Enable or disable one service for one company, creating the override row on first use.
    #[instrument(skip(self, input))]
    pub async fn set_enabled(&self, input: SetServiceInput) -> Result<CompanyServiceView, ServiceError> {
        let company_id = input.company_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let service_id = input.service_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let is_enabled = input.is_enabled.as_ref().and_then(serde_json::Value::as_bool);
        let (Some(company_id), Some(service_id), Some(is_enabled)) = (company_id, service_id, is_enabled) else {
            return Err(ServiceError::Validation(
                "companyId, serviceId, and isEnabled (boolean) are required".into(),
            ));
        };

        if !self.repo.company_exists(company_id).await? {
            return Err(ServiceError::not_found("Company"));
        }
        let service = self
            .repo
            .find_service(service_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Service"))?;

        let record = self.repo.upsert(company_id, service_id, is_enabled).await?;
        info!(company_id, service_id, is_enabled, "company_service_updated");
        Ok(CompanyServiceView { record, service })
    }
}
