//! Create `user_company_assignment` table linking users to relationships.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCompanyAssignment::Table)
                    .if_not_exists()
                    .col(string_len(UserCompanyAssignment::AssignmentId, 64).primary_key())
                    .col(string_len(UserCompanyAssignment::UserId, 64).not_null())
                    .col(string_len(UserCompanyAssignment::CompanyRelationshipId, 64).not_null())
                    // Explicitly nullable: not every assignment carries a designation
                    .col(
                        ColumnDef::new(UserCompanyAssignment::DesignationId)
                            .string_len(64)
                            .null(),
                    )
                    .col(string_len(UserCompanyAssignment::AssignmentStatus, 32).not_null())
                    .col(timestamp_with_time_zone(UserCompanyAssignment::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_user")
                            .from(UserCompanyAssignment::Table, UserCompanyAssignment::UserId)
                            .to(UserMaster::Table, UserMaster::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_relationship")
                            .from(UserCompanyAssignment::Table, UserCompanyAssignment::CompanyRelationshipId)
                            .to(CompanyRelationship::Table, CompanyRelationship::CompanyRelationshipId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_designation")
                            .from(UserCompanyAssignment::Table, UserCompanyAssignment::DesignationId)
                            .to(Designation::Table, Designation::DesignationId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserCompanyAssignment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserCompanyAssignment {
    Table,
    AssignmentId,
    UserId,
    CompanyRelationshipId,
    DesignationId,
    AssignmentStatus,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserMaster { Table, UserId }

#[derive(DeriveIden)]
enum CompanyRelationship { Table, CompanyRelationshipId }

#[derive(DeriveIden)]
enum Designation { Table, DesignationId }
