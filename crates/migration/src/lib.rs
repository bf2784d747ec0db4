//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_company_master;
mod m20250101_000002_create_user_master;
mod m20250101_000003_create_designation;
mod m20250101_000004_create_company_relationship;
mod m20250101_000005_create_user_company_assignment;
mod m20250101_000006_create_service_master;
mod m20250101_000007_create_company_service;
mod m20250101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_company_master::Migration),
            Box::new(m20250101_000002_create_user_master::Migration),
            Box::new(m20250101_000003_create_designation::Migration),
            Box::new(m20250101_000004_create_company_relationship::Migration),
            Box::new(m20250101_000005_create_user_company_assignment::Migration),
            Box::new(m20250101_000006_create_service_master::Migration),
            Box::new(m20250101_000007_create_company_service::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000008_add_indexes::Migration),
        ]
    }
}
