//! Company relationships: domain types, validation rules, repository, service.
//!
//! A relationship links two companies with a typed, status-tracked edge.
//! Deletes are soft: the row and its user assignments are marked INACTIVE.

pub mod domain;
pub mod rules;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::RelationshipService;
