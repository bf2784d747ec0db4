use std::sync::Arc;

use tracing::{info, instrument};

use models::company_relationship;

use super::domain::{
    CreateRelationshipInput, RelationshipCounts, RelationshipDetail, RelationshipListItem, RelationshipWithCompanies,
    SoftDeleteOutcome, UpdateRelationshipInput,
};
use super::repository::RelationshipRepository;
use super::rules;
use crate::errors::ServiceError;

/// Relationship business service independent of web framework
#[derive(Clone)]
pub struct RelationshipService {
    repo: Arc<dyn RelationshipRepository>,
}

impl RelationshipService {
    pub fn new(repo: Arc<dyn RelationshipRepository>) -> Self { Self { repo } }

    /// All relationships, newest first, each with both companies and its assignment count.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<RelationshipListItem>, ServiceError> {
        let rels = self.repo.list_relationships().await?;
        let ids: Vec<String> = rels.iter().map(|r| r.company_relationship_id.clone()).collect();
        let mut company_ids: Vec<String> = rels
            .iter()
            .flat_map(|r| [r.from_company_id.clone(), r.to_company_id.clone()])
            .collect();
        company_ids.sort();
        company_ids.dedup();

        let (companies, counts) =
            tokio::try_join!(self.repo.find_companies(&company_ids), self.repo.count_assignments(&ids))?;

        rels.into_iter()
            .map(|r| {
                let count = RelationshipCounts { user_company_assignments: counts.get(&r.company_relationship_id).copied().unwrap_or(0) };
                let from_company = lookup(&companies, &r.from_company_id)?;
                let to_company = lookup(&companies, &r.to_company_id)?;
                Ok(RelationshipListItem { relationship: RelationshipWithCompanies { relationship: r, from_company, to_company }, count })
            })
            .collect()
    }

    /// Create an ACTIVE relationship between two existing companies.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::enums::CompanyType;
    /// use service::relationship::{RelationshipService, domain::CreateRelationshipInput, repository::mock::MockRelationshipRepository};
    /// let repo = Arc::new(MockRelationshipRepository::default());
    /// tokio_test::block_on(repo.add_company("m1", "Acme Foods", CompanyType::Merchant));
    /// tokio_test::block_on(repo.add_company("s1", "Fresh Farms", CompanyType::Supplier));
    /// let svc = RelationshipService::new(repo);
    /// let input = CreateRelationshipInput {
    ///     from_company_id: Some("m1".into()),
    ///     to_company_id: Some("s1".into()),
    ///     relationship_type: Some("MERCHANT_SUPPLIER".into()),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.to_company.company_name, "Fresh Farms");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateRelationshipInput) -> Result<RelationshipWithCompanies, ServiceError> {
        let fields = rules::require_fields(&input)?;

        let (from, to) = tokio::try_join!(
            self.repo.find_company(&fields.from_company_id),
            self.repo.find_company(&fields.to_company_id)
        )?;
        let from_company = from.ok_or_else(|| ServiceError::not_found("From company"))?;
        let to_company = to.ok_or_else(|| ServiceError::not_found("To company"))?;

        let kind = rules::parse_relationship_type(&fields.relationship_type)?;
        rules::check_pairing(kind, &from_company, &to_company)?;

        if self.repo.exists(&from_company.company_id, &to_company.company_id, kind).await? {
            return Err(ServiceError::Duplicate("Relationship already exists".into()));
        }

        let relationship = self.repo.insert(&from_company.company_id, &to_company.company_id, kind).await?;
        info!(
            relationship_id = %relationship.company_relationship_id,
            from_company_id = %relationship.from_company_id,
            to_company_id = %relationship.to_company_id,
            relationship_type = %kind,
            "relationship_created"
        );
        Ok(RelationshipWithCompanies { relationship, from_company, to_company })
    }

    /// One relationship with companies and every user assignment under it.
    #[instrument(skip(self))]
    pub async fn get(&self, relationship_id: &str) -> Result<RelationshipDetail, ServiceError> {
        let relationship = self
            .repo
            .find_by_id(relationship_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Relationship"))?;
        let assignments = self.repo.list_assignments(relationship_id).await?;
        let relationship = self.with_companies(relationship).await?;
        Ok(RelationshipDetail { relationship, user_company_assignments: assignments })
    }

    /// Change the status; a body without a status leaves the row untouched.
    #[instrument(skip(self, input))]
    pub async fn update(&self, relationship_id: &str, input: UpdateRelationshipInput) -> Result<RelationshipWithCompanies, ServiceError> {
        let existing = self
            .repo
            .find_by_id(relationship_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Relationship"))?;
        let Some(raw) = input.relationship_status.as_deref() else {
            return self.with_companies(existing).await;
        };
        let status = rules::parse_relationship_status(raw)?;

        let relationship = self
            .repo
            .update_status(relationship_id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("Relationship"))?;
        info!(relationship_id, relationship_status = %status, "relationship_updated");
        self.with_companies(relationship).await
    }

    /// Soft delete: ACTIVE assignments and the relationship become INACTIVE together.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::enums::{AssignmentStatus, CompanyType};
    /// use service::relationship::{RelationshipService, domain::CreateRelationshipInput, repository::mock::MockRelationshipRepository};
    /// let repo = Arc::new(MockRelationshipRepository::default());
    /// tokio_test::block_on(repo.add_company("a", "A", CompanyType::Partner));
    /// tokio_test::block_on(repo.add_company("b", "B", CompanyType::Partner));
    /// tokio_test::block_on(repo.add_user("u1", "Dana", "dana@example.com"));
    /// let svc = RelationshipService::new(repo.clone());
    /// let rel = tokio_test::block_on(svc.create(CreateRelationshipInput {
    ///     from_company_id: Some("a".into()),
    ///     to_company_id: Some("b".into()),
    ///     relationship_type: Some("PARTNER".into()),
    /// })).unwrap();
    /// let id = rel.relationship.company_relationship_id;
    /// tokio_test::block_on(repo.assign("u1", &id, None, AssignmentStatus::Active));
    /// let outcome = tokio_test::block_on(svc.soft_delete(&id)).unwrap();
    /// assert_eq!(outcome.deactivated_assignments, 1);
    /// ```
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, relationship_id: &str) -> Result<SoftDeleteOutcome, ServiceError> {
        let (relationship, deactivated) = self
            .repo
            .deactivate(relationship_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Relationship"))?;
        info!(relationship_id, deactivated_assignments = deactivated, "relationship_deactivated");
        Ok(SoftDeleteOutcome {
            message: "Relationship deactivated successfully".into(),
            relationship,
            deactivated_assignments: deactivated,
        })
    }

    async fn with_companies(&self, relationship: company_relationship::Model) -> Result<RelationshipWithCompanies, ServiceError> {
        let (from, to) = tokio::try_join!(
            self.repo.find_company(&relationship.from_company_id),
            self.repo.find_company(&relationship.to_company_id)
        )?;
        let from_company = from.ok_or_else(|| dangling(&relationship.from_company_id))?;
        let to_company = to.ok_or_else(|| dangling(&relationship.to_company_id))?;
        Ok(RelationshipWithCompanies { relationship, from_company, to_company })
    }
}

fn dangling(company_id: &str) -> ServiceError {
    ServiceError::Db(format!("relationship references missing company {company_id}"))
}

fn lookup<V: Clone>(map: &std::collections::HashMap<String, V>, company_id: &str) -> Result<V, ServiceError> {
    map.get(company_id).cloned().ok_or_else(|| dangling(company_id))
}
