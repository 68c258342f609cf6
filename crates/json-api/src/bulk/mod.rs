//! Bulk data management: seeding and purges.

mod errors;
mod handlers;

pub(crate) use handlers::*;
