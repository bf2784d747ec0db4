//! Create `designation` table (job role a user holds inside a relationship).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Designation::Table)
                    .if_not_exists()
                    .col(string_len(Designation::DesignationId, 64).primary_key())
                    .col(string_len(Designation::DesignationName, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Designation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Designation { Table, DesignationId, DesignationName }
