//! Create `company_service` table: per-company overrides of the service catalog.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyService::Table)
                    .if_not_exists()
                    .col(string_len(CompanyService::CompanyServiceId, 64).primary_key())
                    .col(string_len(CompanyService::CompanyId, 64).not_null())
                    .col(string_len(CompanyService::ServiceId, 64).not_null())
                    .col(boolean(CompanyService::IsEnabled).not_null())
                    .col(timestamp_with_time_zone(CompanyService::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CompanyService::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_service_company")
                            .from(CompanyService::Table, CompanyService::CompanyId)
                            .to(CompanyMaster::Table, CompanyMaster::CompanyId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_service_service")
                            .from(CompanyService::Table, CompanyService::ServiceId)
                            .to(ServiceMaster::Table, ServiceMaster::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyService { Table, CompanyServiceId, CompanyId, ServiceId, IsEnabled, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum CompanyMaster { Table, CompanyId }

#[derive(DeriveIden)]
enum ServiceMaster { Table, ServiceId }
