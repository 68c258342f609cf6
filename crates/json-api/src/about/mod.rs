//! About Us

mod errors;
mod handlers;
mod models;

pub(crate) use handlers::*;
