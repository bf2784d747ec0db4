//! Service layer providing business operations on top of models.
//! - Relationship and service-catalog rules live here, behind repository traits.
//! - Session context (token claims, permissions, navigation) is resolved per request.
//! - Errors are typed per failure kind; the HTTP layer maps them to status codes.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod relationship;
pub mod service_catalog;
pub mod session;
pub mod deals;
