//! Request-scoped session context.
//!
//! A signed token carries the user's selected company context and permissions.
//! The resolver verifies it and attaches the navigation routes the user may see.

pub mod domain;
pub mod errors;
pub mod token;
pub mod navigation;
pub mod service;

pub use domain::{CurrentContext, RouteDefinition, SessionContext};
pub use errors::SessionError;
pub use navigation::RouteCatalog;
pub use service::SessionResolver;
pub use token::{SessionClaims, SessionTokens};
