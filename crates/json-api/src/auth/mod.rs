//! Admin Authentication

mod credentials;
pub(crate) mod login;
pub(crate) mod middleware;
