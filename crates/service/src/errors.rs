use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate: {0}")]
    Duplicate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Message safe to hand back to a client; `None` for internal failures.
    pub fn public_message(&self) -> Option<String> {
        match self {
            ServiceError::Validation(m) | ServiceError::Duplicate(m) | ServiceError::NotFound(m) => Some(m.clone()),
            ServiceError::Model(models::errors::ModelError::Validation(m)) => Some(m.clone()),
            ServiceError::Db(_) | ServiceError::Storage(_) | ServiceError::Model(_) => None,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
