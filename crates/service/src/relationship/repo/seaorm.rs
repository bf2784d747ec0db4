use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use models::enums::{AssignmentStatus, RelationshipStatus, RelationshipType};
use models::{company_master, company_relationship, designation, user_company_assignment, user_master};

use crate::errors::ServiceError;
use crate::relationship::domain::{AssignmentDetail, CompanySummary, DesignationSummary};
use crate::relationship::repository::RelationshipRepository;

pub struct SeaOrmRelationshipRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct AssignmentCountRow {
    company_relationship_id: String,
    total: i64,
}

fn map_insert_err(e: DbErr) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Duplicate("Relationship already exists".into()),
        _ => ServiceError::from(e),
    }
}

#[async_trait::async_trait]
impl RelationshipRepository for SeaOrmRelationshipRepository {
    async fn list_relationships(&self) -> Result<Vec<company_relationship::Model>, ServiceError> {
        let rows = company_relationship::Entity::find()
            .order_by_desc(company_relationship::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_company(&self, company_id: &str) -> Result<Option<CompanySummary>, ServiceError> {
        let res = company_master::Entity::find_by_id(company_id.to_string()).one(&self.db).await?;
        Ok(res.map(CompanySummary::from))
    }

    async fn find_companies(&self, company_ids: &[String]) -> Result<HashMap<String, CompanySummary>, ServiceError> {
        if company_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = company_master::Entity::find()
            .filter(company_master::Column::CompanyId.is_in(company_ids.to_vec()))
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|c| (c.company_id.clone(), CompanySummary::from(c))).collect())
    }

    async fn count_assignments(&self, relationship_ids: &[String]) -> Result<HashMap<String, u64>, ServiceError> {
        if relationship_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = user_company_assignment::Entity::find()
            .select_only()
            .column(user_company_assignment::Column::CompanyRelationshipId)
            .column_as(Expr::col(user_company_assignment::Column::AssignmentId).count(), "total")
            .filter(user_company_assignment::Column::CompanyRelationshipId.is_in(relationship_ids.to_vec()))
            .group_by(user_company_assignment::Column::CompanyRelationshipId)
            .into_model::<AssignmentCountRow>()
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| (r.company_relationship_id, u64::try_from(r.total).unwrap_or(0)))
            .collect())
    }

    async fn exists(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<bool, ServiceError> {
        let found = company_relationship::Entity::find()
            .filter(company_relationship::Column::FromCompanyId.eq(from_company_id))
            .filter(company_relationship::Column::ToCompanyId.eq(to_company_id))
            .filter(company_relationship::Column::RelationshipType.eq(kind))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn insert(&self, from_company_id: &str, to_company_id: &str, kind: RelationshipType) -> Result<company_relationship::Model, ServiceError> {
        let now = Utc::now();
        let am = company_relationship::ActiveModel {
            company_relationship_id: Set(Uuid::new_v4().to_string()),
            from_company_id: Set(from_company_id.to_string()),
            to_company_id: Set(to_company_id.to_string()),
            relationship_type: Set(kind),
            relationship_status: Set(RelationshipStatus::Active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        am.insert(&self.db).await.map_err(map_insert_err)
    }

    async fn find_by_id(&self, relationship_id: &str) -> Result<Option<company_relationship::Model>, ServiceError> {
        let res = company_relationship::Entity::find_by_id(relationship_id.to_string()).one(&self.db).await?;
        Ok(res)
    }

    async fn list_assignments(&self, relationship_id: &str) -> Result<Vec<AssignmentDetail>, ServiceError> {
        let rows = user_company_assignment::Entity::find()
            .filter(user_company_assignment::Column::CompanyRelationshipId.eq(relationship_id))
            .order_by_asc(user_company_assignment::Column::CreatedAt)
            .find_also_related(user_master::Entity)
            .all(&self.db)
            .await?;

        let designation_ids: Vec<String> = rows.iter().filter_map(|(a, _)| a.designation_id.clone()).collect();
        let designations: HashMap<String, DesignationSummary> = if designation_ids.is_empty() {
            HashMap::new()
        } else {
            designation::Entity::find()
                .filter(designation::Column::DesignationId.is_in(designation_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|d| (d.designation_id.clone(), DesignationSummary::from(d)))
                .collect()
        };

        rows.into_iter()
            .map(|(a, user)| {
                let user = user.ok_or_else(|| {
                    ServiceError::Db(format!("assignment {} references missing user {}", a.assignment_id, a.user_id))
                })?;
                Ok(AssignmentDetail {
                    designation: a.designation_id.as_ref().and_then(|d| designations.get(d).cloned()),
                    assignment_id: a.assignment_id,
                    assignment_status: a.assignment_status,
                    user: user.into(),
                })
            })
            .collect()
    }

    async fn update_status(&self, relationship_id: &str, status: RelationshipStatus) -> Result<Option<company_relationship::Model>, ServiceError> {
        let Some(existing) = company_relationship::Entity::find_by_id(relationship_id.to_string()).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: company_relationship::ActiveModel = existing.into();
        am.relationship_status = Set(status);
        am.updated_at = Set(Utc::now().into());
        Ok(Some(am.update(&self.db).await?))
    }

    async fn deactivate(&self, relationship_id: &str) -> Result<Option<(company_relationship::Model, u64)>, ServiceError> {
        // an early return drops the transaction, which rolls it back
        let txn = self.db.begin().await?;
        let Some(existing) = company_relationship::Entity::find_by_id(relationship_id.to_string()).one(&txn).await? else {
            return Ok(None);
        };

        let res = user_company_assignment::Entity::update_many()
            .col_expr(user_company_assignment::Column::AssignmentStatus, Expr::value(AssignmentStatus::Inactive))
            .filter(user_company_assignment::Column::CompanyRelationshipId.eq(relationship_id))
            .filter(user_company_assignment::Column::AssignmentStatus.eq(AssignmentStatus::Active))
            .exec(&txn)
            .await?;

        let mut am: company_relationship::ActiveModel = existing.into();
        am.relationship_status = Set(RelationshipStatus::Inactive);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        Ok(Some((updated, res.rows_affected)))
    }
}
