//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use medovik_app::{
    auth::MockAuthService,
    context::AppContext,
    database::MockStoreHealth,
    domain::{
        about::MockAboutService,
        bulk::MockBulkService,
        categories::{MockCategoriesService, records::CategoryRecord},
        orders::{
            MockOrdersService,
            records::{OrderItem, OrderRecord},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, WeightPrice},
        },
        promocodes::{
            MockPromocodesService,
            records::{DiscountType, PromocodeRecord},
        },
    },
};

use crate::state::State;

/// Every service mocked with no expectations, so any call fails the test.
pub(crate) fn strict_context() -> AppContext {
    AppContext {
        categories: Arc::new(MockCategoriesService::new()),
        products: Arc::new(MockProductsService::new()),
        promocodes: Arc::new(MockPromocodesService::new()),
        orders: Arc::new(MockOrdersService::new()),
        about: Arc::new(MockAboutService::new()),
        bulk: Arc::new(MockBulkService::new()),
        auth: Arc::new(MockAuthService::new()),
        store: Arc::new(MockStoreHealth::new()),
    }
}

pub(crate) fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service(
        AppContext {
            categories: Arc::new(categories),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn promocodes_service(promocodes: MockPromocodesService, route: Router) -> Service {
    service(
        AppContext {
            promocodes: Arc::new(promocodes),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        AppContext {
            orders: Arc::new(orders),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn about_service(about: MockAboutService, route: Router) -> Service {
    service(
        AppContext {
            about: Arc::new(about),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn bulk_service(bulk: MockBulkService, route: Router) -> Service {
    service(
        AppContext {
            bulk: Arc::new(bulk),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    service(
        AppContext {
            auth: Arc::new(auth),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn store_service(store: MockStoreHealth, route: Router) -> Service {
    service(
        AppContext {
            store: Arc::new(store),
            ..strict_context()
        },
        route,
    )
}

/// A storage failure that never touched a database.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

pub(crate) fn make_category(id: &str, order: i32) -> CategoryRecord {
    CategoryRecord {
        id: id.into(),
        name: format!("Category {id}"),
        slug: id.to_string(),
        order,
    }
}

pub(crate) fn make_product(id: &str) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: "Мёд Гречишный".to_string(),
        description: String::new(),
        category_id: "cat-honey".into(),
        image: String::new(),
        base_price: 1200.0,
        weight_prices: vec![WeightPrice {
            weight: "250гр".to_string(),
            price: 1200.0,
        }],
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_promocode(id: &str, code: &str) -> PromocodeRecord {
    PromocodeRecord {
        id: id.into(),
        code: code.to_string(),
        discount_type: DiscountType::Percent,
        discount_value: 10.0,
        max_uses: 100,
        current_uses: 0,
        is_active: true,
    }
}

pub(crate) fn make_order(id: &str) -> OrderRecord {
    OrderRecord {
        id: id.into(),
        customer_name: "Айгерим".to_string(),
        customer_phone: "+77001234567".to_string(),
        items: vec![OrderItem {
            name: "Мёд Гречишный".to_string(),
            weight: Some("250гр".to_string()),
            price: 1200.0,
            quantity: 2,
        }],
        subtotal: 2400.0,
        discount: 240.0,
        total: 2160.0,
        promocode: Some("HONEY10".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
