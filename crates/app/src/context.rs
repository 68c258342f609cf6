//! App Context

use std::sync::Arc;

use crate::{
    auth::{AdminCredentials, AuthService, ConfiguredAuthService},
    database::{Db, StoreHealth},
    domain::{
        about::{AboutService, PgAboutService},
        bulk::{BulkService, PgBulkService},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        promocodes::{PgPromocodesService, PromocodesService},
    },
};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub promocodes: Arc<dyn PromocodesService>,
    pub orders: Arc<dyn OrdersService>,
    pub about: Arc<dyn AboutService>,
    pub bulk: Arc<dyn BulkService>,
    pub auth: Arc<dyn AuthService>,
    pub store: Arc<dyn StoreHealth>,
}

impl AppContext {
    /// Build the Postgres-backed services over one database handle.
    ///
    /// The caller keeps `db` and closes it once the services are no longer used.
    #[must_use]
    pub fn new(db: &Db, credentials: AdminCredentials) -> Self {
        Self {
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            promocodes: Arc::new(PgPromocodesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            about: Arc::new(PgAboutService::new(db.clone())),
            bulk: Arc::new(PgBulkService::new(db.clone())),
            auth: Arc::new(ConfiguredAuthService::new(credentials)),
            store: Arc::new(db.clone()),
        }
    }
}
