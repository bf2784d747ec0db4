use std::collections::BTreeSet;

use tracing::{debug, instrument};

use super::domain::SessionContext;
use super::errors::SessionError;
use super::navigation::RouteCatalog;
use super::token::SessionTokens;

/// Turns a bearer token into a [`SessionContext`].
#[derive(Clone)]
pub struct SessionResolver {
    tokens: SessionTokens,
    catalog: RouteCatalog,
}

impl SessionResolver {
    pub fn new(tokens: SessionTokens, catalog: RouteCatalog) -> Self { Self { tokens, catalog } }

    pub fn tokens(&self) -> &SessionTokens { &self.tokens }

    #[instrument(skip_all)]
    pub async fn resolve(&self, token: Option<&str>) -> Result<SessionContext, SessionError> {
        let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(SessionError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let permissions: BTreeSet<String> = claims.permissions.into_iter().collect();
        let accessible_routes = self.catalog.accessible_for(&permissions).await;
        debug!(user_id = %claims.sub, routes = accessible_routes.len(), "session resolved");

        Ok(SessionContext { user_id: claims.sub, current_context: claims.context, permissions, accessible_routes })
    }
}
