use thiserror::Error;

/// Failures while turning a request token into a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing session token")]
    MissingToken,
    #[error("invalid session token: {0}")]
    InvalidToken(String),
    #[error("token encoding failed: {0}")]
    Encoding(String),
    #[error("route catalog error: {0}")]
    Catalog(String),
}

impl SessionError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            SessionError::MissingToken => 2001,
            SessionError::InvalidToken(_) => 2002,
            SessionError::Encoding(_) => 2101,
            SessionError::Catalog(_) => 2200,
        }
    }
}

impl From<crate::errors::ServiceError> for SessionError {
    fn from(e: crate::errors::ServiceError) -> Self { SessionError::Catalog(e.to_string()) }
}
