//! Admin Authentication

mod credentials;
mod errors;
mod service;

pub use credentials::*;
pub use errors::*;
pub use service::*;
