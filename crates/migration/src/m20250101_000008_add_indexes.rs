use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Relationship: one row per (from, to, type)
        manager
            .create_index(
                Index::create()
                    .name("uniq_relationship_from_to_type")
                    .table(CompanyRelationship::Table)
                    .col(CompanyRelationship::FromCompanyId)
                    .col(CompanyRelationship::ToCompanyId)
                    .col(CompanyRelationship::RelationshipType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Relationship listing is ordered by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_relationship_created_at")
                    .table(CompanyRelationship::Table)
                    .col(CompanyRelationship::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Assignment: lookups and bulk deactivation by relationship
        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_relationship")
                    .table(UserCompanyAssignment::Table)
                    .col(UserCompanyAssignment::CompanyRelationshipId)
                    .to_owned(),
            )
            .await?;

        // CompanyService: upsert target (company_id, service_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_company_service_pair")
                    .table(CompanyService::Table)
                    .col(CompanyService::CompanyId)
                    .col(CompanyService::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_relationship_from_to_type").table(CompanyRelationship::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_relationship_created_at").table(CompanyRelationship::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_assignment_relationship").table(UserCompanyAssignment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_company_service_pair").table(CompanyService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyRelationship { Table, FromCompanyId, ToCompanyId, RelationshipType, CreatedAt }

#[derive(DeriveIden)]
enum UserCompanyAssignment { Table, CompanyRelationshipId }

#[derive(DeriveIden)]
enum CompanyService { Table, CompanyId, ServiceId }
