use std::collections::HashMap;

use async_trait::async_trait;

use models::company_relationship;
use models::enums::{RelationshipStatus, RelationshipType};

use super::domain::{AssignmentDetail, CompanySummary};
use crate::errors::ServiceError;

/// Persistence for company relationships and the rows hanging off them.
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// All relationships, newest first.
    async fn list_relationships(&self) -> Result<Vec<company_relationship::Model>, ServiceError>;
    async fn find_company(&self, company_id: &str) -> Result<Option<CompanySummary>, ServiceError>;
    async fn find_companies(&self, company_ids: &[String]) -> Result<HashMap<String, CompanySummary>, ServiceError>;
    /// Assignment totals (any status) keyed by relationship id; absent ids have none.
    async fn count_assignments(&self, relationship_ids: &[String]) -> Result<HashMap<String, u64>, ServiceError>;

    async fn exists(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<bool, ServiceError>;
    /// Insert an ACTIVE relationship. A concurrent duplicate surfaces as `Duplicate`.
    async fn insert(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<company_relationship::Model, ServiceError>;
    async fn find_by_id(&self, relationship_id: &str) -> Result<Option<company_relationship::Model>, ServiceError>;
    async fn list_assignments(&self, relationship_id: &str) -> Result<Vec<AssignmentDetail>, ServiceError>;

    async fn update_status(&self, relationship_id: &str, status: RelationshipStatus) -> Result<Option<company_relationship::Model>, ServiceError>;
    /// Atomically mark every ACTIVE assignment and then the relationship INACTIVE.
    /// Returns the updated relationship and how many assignments changed.
    async fn deactivate(&self, relationship_id: &str) -> Result<Option<(company_relationship::Model, u64)>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use models::enums::{AssignmentStatus, CompanyType};

    use crate::relationship::domain::{AssignedUser, DesignationSummary};

    #[derive(Debug, Clone)]
    struct MockAssignment {
        assignment_id: String,
        user_id: String,
        relationship_id: String,
        designation_id: Option<String>,
        status: AssignmentStatus,
    }

    #[derive(Default)]
    struct State {
        companies: HashMap<String, CompanySummary>,
        users: HashMap<String, AssignedUser>,
        designations: HashMap<String, DesignationSummary>,
        // insertion order, oldest first
        relationships: Vec<company_relationship::Model>,
        assignments: Vec<MockAssignment>,
    }

    #[derive(Default)]
    pub struct MockRelationshipRepository {
        state: RwLock<State>,
    }

    impl MockRelationshipRepository {
        pub async fn add_company(&self, company_id: &str, name: &str, company_type: CompanyType) {
            let c = CompanySummary { company_id: company_id.into(), company_name: name.into(), company_type };
            self.state.write().await.companies.insert(company_id.into(), c);
        }

        pub async fn add_user(&self, user_id: &str, name: &str, email: &str) {
            let u = AssignedUser { user_id: user_id.into(), name: name.into(), email: email.into() };
            self.state.write().await.users.insert(user_id.into(), u);
        }

        pub async fn add_designation(&self, designation_id: &str, name: &str) {
            let d = DesignationSummary { designation_id: designation_id.into(), designation_name: name.into() };
            self.state.write().await.designations.insert(designation_id.into(), d);
        }

        pub async fn assign(&self, user_id: &str, relationship_id: &str, designation_id: Option<&str>, status: AssignmentStatus) -> String {
            let assignment_id = Uuid::new_v4().to_string();
            self.state.write().await.assignments.push(MockAssignment {
                assignment_id: assignment_id.clone(),
                user_id: user_id.into(),
                relationship_id: relationship_id.into(),
                designation_id: designation_id.map(Into::into),
                status,
            });
            assignment_id
        }

        pub async fn relationship_count(&self) -> usize {
            self.state.read().await.relationships.len()
        }

        /// Assignment statuses for one relationship, in insertion order.
        pub async fn assignment_statuses(&self, relationship_id: &str) -> Vec<AssignmentStatus> {
            let st = self.state.read().await;
            st.assignments.iter().filter(|a| a.relationship_id == relationship_id).map(|a| a.status).collect()
        }
    }

    #[async_trait]
    impl RelationshipRepository for MockRelationshipRepository {
        async fn list_relationships(&self) -> Result<Vec<company_relationship::Model>, ServiceError> {
            let st = self.state.read().await;
            let mut out: Vec<_> = st.relationships.iter().rev().cloned().collect();
            // stable sort keeps later inserts first on equal timestamps
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(out)
        }

        async fn find_company(&self, company_id: &str) -> Result<Option<CompanySummary>, ServiceError> {
            Ok(self.state.read().await.companies.get(company_id).cloned())
        }

        async fn find_companies(&self, company_ids: &[String]) -> Result<HashMap<String, CompanySummary>, ServiceError> {
            let st = self.state.read().await;
            Ok(company_ids
                .iter()
                .filter_map(|id| st.companies.get(id).map(|c| (id.clone(), c.clone())))
                .collect())
        }

        async fn count_assignments(&self, relationship_ids: &[String]) -> Result<HashMap<String, u64>, ServiceError> {
            let st = self.state.read().await;
            let mut counts = HashMap::new();
            for a in st.assignments.iter().filter(|a| relationship_ids.contains(&a.relationship_id)) {
                *counts.entry(a.relationship_id.clone()).or_insert(0) += 1;
            }
            Ok(counts)
        }

        async fn exists(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<bool, ServiceError> {
            let st = self.state.read().await;
            Ok(st.relationships.iter().any(|r| {
                r.from_company_id == from_company_id && r.to_company_id == to_company_id && r.relationship_type == kind
            }))
        }

        async fn insert(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<company_relationship::Model, ServiceError> {
            let mut st = self.state.write().await;
            if st.relationships.iter().any(|r| {
                r.from_company_id == from_company_id && r.to_company_id == to_company_id && r.relationship_type == kind
            }) {
                return Err(ServiceError::Duplicate("Relationship already exists".into()));
            }
            let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
            let m = company_relationship::Model {
                company_relationship_id: Uuid::new_v4().to_string(),
                from_company_id: from_company_id.into(),
                to_company_id: to_company_id.into(),
                relationship_type: kind,
                relationship_status: RelationshipStatus::Active,
                created_at: now,
                updated_at: now,
            };
            st.relationships.push(m.clone());
            Ok(m)
        }

        async fn find_by_id(&self, relationship_id: &str) -> Result<Option<company_relationship::Model>, ServiceError> {
            let st = self.state.read().await;
            Ok(st.relationships.iter().find(|r| r.company_relationship_id == relationship_id).cloned())
        }

        async fn list_assignments(&self, relationship_id: &str) -> Result<Vec<AssignmentDetail>, ServiceError> {
            let st = self.state.read().await;
            let mut out = Vec::new();
            for a in st.assignments.iter().filter(|a| a.relationship_id == relationship_id) {
                let user = st
                    .users
                    .get(&a.user_id)
                    .cloned()
                    .ok_or_else(|| ServiceError::Db(format!("assignment {} references missing user", a.assignment_id)))?;
                let designation = a.designation_id.as_ref().and_then(|d| st.designations.get(d).cloned());
                out.push(AssignmentDetail {
                    assignment_id: a.assignment_id.clone(),
                    assignment_status: a.status,
                    user,
                    designation,
                });
            }
            Ok(out)
        }

        async fn update_status(&self, relationship_id: &str, status: RelationshipStatus) -> Result<Option<company_relationship::Model>, ServiceError> {
            let mut st = self.state.write().await;
            let Some(r) = st.relationships.iter_mut().find(|r| r.company_relationship_id == relationship_id) else {
                return Ok(None);
            };
            r.relationship_status = status;
            r.updated_at = Utc::now().into();
            Ok(Some(r.clone()))
        }

        async fn deactivate(&self, relationship_id: &str) -> Result<Option<(company_relationship::Model, u64)>, ServiceError> {
            // single write guard: readers never see a half-applied delete
            let mut st = self.state.write().await;
            let Some(idx) = st.relationships.iter().position(|r| r.company_relationship_id == relationship_id) else {
                return Ok(None);
            };
            let mut changed = 0u64;
            for a in st.assignments.iter_mut().filter(|a| a.relationship_id == relationship_id) {
                if a.status == AssignmentStatus::Active {
                    a.status = AssignmentStatus::Inactive;
                    changed += 1;
                }
            }
            let r = &mut st.relationships[idx];
            r.relationship_status = RelationshipStatus::Inactive;
            r.updated_at = Utc::now().into();
            Ok(Some((r.clone(), changed)))
        }
    }
}
