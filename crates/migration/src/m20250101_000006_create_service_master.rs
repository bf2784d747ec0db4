//! Create `service_master` table: the catalog of offerable services.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceMaster::Table)
                    .if_not_exists()
                    .col(string_len(ServiceMaster::ServiceId, 64).primary_key())
                    .col(string_len(ServiceMaster::ServiceName, 128).unique_key().not_null())
                    .col(
                        ColumnDef::new(ServiceMaster::ServiceDescription)
                            .text()
                            .null(),
                    )
                    .col(string_len(ServiceMaster::ServiceStatus, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceMaster::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceMaster { Table, ServiceId, ServiceName, ServiceDescription, ServiceStatus }
