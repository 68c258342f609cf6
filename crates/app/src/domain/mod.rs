//! Storefront Domain Concerns

pub mod about;
pub mod bulk;
pub mod categories;
pub mod orders;
pub mod products;
pub mod promocodes;
