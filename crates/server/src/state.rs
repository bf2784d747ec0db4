use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::relationship::repo::seaorm::SeaOrmRelationshipRepository;
use service::relationship::RelationshipService;
use service::service_catalog::repo::seaorm::SeaOrmServiceCatalogRepository;
use service::service_catalog::ServiceCatalog;
use service::session::SessionResolver;

/// Shared handler state. Cheap to clone; every field is reference counted inside.
#[derive(Clone)]
pub struct AppState {
    pub relationships: RelationshipService,
    pub services: ServiceCatalog,
    pub sessions: SessionResolver,
}

impl AppState {
    /// Wire the database-backed repositories.
    pub fn with_database(db: DatabaseConnection, sessions: SessionResolver) -> Self {
        Self {
            relationships: RelationshipService::new(Arc::new(SeaOrmRelationshipRepository { db: db.clone() })),
            services: ServiceCatalog::new(Arc::new(SeaOrmServiceCatalogRepository { db })),
            sessions,
        }
    }
}
