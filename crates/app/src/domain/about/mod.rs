//! About Us

pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::AboutServiceError;
pub use service::*;
