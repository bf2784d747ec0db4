//! Per-company service enablement over the global service catalog.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ServiceCatalog;
