pub mod errors;
pub mod db;
pub mod enums;
pub mod company_master;
pub mod company_relationship;
pub mod user_master;
pub mod designation;
pub mod user_company_assignment;
pub mod service_master;
pub mod company_service;

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use sea_orm::{EntityTrait, TransactionTrait};

    use crate::enums::{CompanyType, ServiceStatus};
    use crate::{company_master, db, designation, service_master, user_master};

    #[test]
    fn company_name_validation() {
        assert!(company_master::validate_name("Acme Foods").is_ok());
        assert!(company_master::validate_name("   ").is_err());
        assert!(company_master::validate_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn user_validation() {
        assert!(user_master::validate_email("a@b.com").is_ok());
        assert!(user_master::validate_email("nope").is_err());
        assert!(user_master::validate_name("").is_err());
    }

    #[tokio::test]
    async fn master_rows_round_trip_through_database() -> anyhow::Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = db::connect().await?;
        migration::Migrator::up(&db, None).await?;

        let merchant = company_master::create(&db, "Model Test Merchant", CompanyType::Merchant).await?;
        let found = company_master::Entity::find_by_id(merchant.company_id.clone()).one(&db).await?;
        assert_eq!(found.map(|c| c.company_type), Some(CompanyType::Merchant));

        let svc = service_master::create(&db, &format!("svc_{}", uuid::Uuid::new_v4()), None, ServiceStatus::Active).await?;
        assert_eq!(svc.service_status, ServiceStatus::Active);

        let u = user_master::create(&db, &format!("model_{}@example.com", uuid::Uuid::new_v4()), "Model User").await?;
        let d = designation::create(&db, "Account Manager").await?;

        // rows written inside a rolled back transaction disappear
        let txn = db.begin().await?;
        let other = company_master::ActiveModel {
            company_id: sea_orm::Set(uuid::Uuid::new_v4().to_string()),
            company_name: sea_orm::Set("rolled back".into()),
            company_type: sea_orm::Set(CompanyType::Supplier),
            created_at: sea_orm::Set(chrono::Utc::now().into()),
        };
        let other = sea_orm::ActiveModelTrait::insert(other, &txn).await?;
        txn.rollback().await?;
        assert!(company_master::Entity::find_by_id(other.company_id).one(&db).await?.is_none());

        // cleanup
        service_master::Entity::delete_by_id(svc.service_id).exec(&db).await?;
        user_master::Entity::delete_by_id(u.user_id).exec(&db).await?;
        designation::Entity::delete_by_id(d.designation_id).exec(&db).await?;
        company_master::Entity::delete_by_id(merchant.company_id).exec(&db).await?;
        Ok(())
    }
}
