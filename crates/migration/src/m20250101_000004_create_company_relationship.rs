//! Create `company_relationship` table with two FKs to `company_master`.
//!
//! Rows are never physically deleted; status moves to INACTIVE instead.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyRelationship::Table)
                    .if_not_exists()
                    .col(string_len(CompanyRelationship::CompanyRelationshipId, 64).primary_key())
                    .col(string_len(CompanyRelationship::FromCompanyId, 64).not_null())
                    .col(string_len(CompanyRelationship::ToCompanyId, 64).not_null())
                    .col(string_len(CompanyRelationship::RelationshipType, 32).not_null())
                    .col(string_len(CompanyRelationship::RelationshipStatus, 32).not_null())
                    .col(timestamp_with_time_zone(CompanyRelationship::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CompanyRelationship::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_relationship_from_company")
                            .from(CompanyRelationship::Table, CompanyRelationship::FromCompanyId)
                            .to(CompanyMaster::Table, CompanyMaster::CompanyId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_relationship_to_company")
                            .from(CompanyRelationship::Table, CompanyRelationship::ToCompanyId)
                            .to(CompanyMaster::Table, CompanyMaster::CompanyId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyRelationship::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyRelationship {
    Table,
    CompanyRelationshipId,
    FromCompanyId,
    ToCompanyId,
    RelationshipType,
    RelationshipStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CompanyMaster { Table, CompanyId }
