//! Create `company_master` table.
//!
//! Root entity for tenancy; relationships and service overrides reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyMaster::Table)
                    .if_not_exists()
                    .col(string_len(CompanyMaster::CompanyId, 64).primary_key())
                    .col(string_len(CompanyMaster::CompanyName, 255).not_null())
                    .col(string_len(CompanyMaster::CompanyType, 32).not_null())
                    .col(timestamp_with_time_zone(CompanyMaster::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyMaster::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyMaster { Table, CompanyId, CompanyName, CompanyType, CreatedAt }
