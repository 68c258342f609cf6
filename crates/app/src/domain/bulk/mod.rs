//! Bulk data management: catalog seeding and collection purges.

pub mod collections;
pub mod errors;
pub(crate) mod fixtures;
pub mod service;

pub use errors::BulkServiceError;
pub use service::*;
