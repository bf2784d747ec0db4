//! Create `user_master` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMaster::Table)
                    .if_not_exists()
                    .col(string_len(UserMaster::UserId, 64).primary_key())
                    .col(string_len(UserMaster::Name, 128).not_null())
                    .col(string_len(UserMaster::Email, 255).unique_key().not_null())
                    .col(timestamp_with_time_zone(UserMaster::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserMaster::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserMaster { Table, UserId, Name, Email, CreatedAt }
