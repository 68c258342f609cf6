//! Bulk Handlers

pub(crate) mod fix_categories;
pub(crate) mod purge;
pub(crate) mod seed;
