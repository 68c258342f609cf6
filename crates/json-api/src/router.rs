//! API Router

use salvo::Router;

use crate::{about, auth, banner, bulk, categories, orders, products, promocodes};

/// Everything under `/api`: public storefront routes first, then the
/// admin routes behind the Basic credential gate.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .get(banner::handler)
        .push(public_router())
        .push(admin_router())
}

fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("{id}").get(categories::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(Router::with_path("promocodes/validate").post(promocodes::validate::handler))
        .push(Router::with_path("orders").post(orders::create::handler))
        .push(Router::with_path("about").get(about::get::handler))
        .push(Router::with_path("seed").post(bulk::seed::handler))
        .push(Router::with_path("fix-categories").post(bulk::fix_categories::handler))
        .push(Router::with_path("admin/login").post(auth::login::handler))
}

fn admin_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("categories")
                .post(categories::create::handler)
                .push(Router::with_path("reorder").post(categories::reorder::handler))
                .push(
                    Router::with_path("{id}")
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("promocodes")
                .get(promocodes::index::handler)
                .post(promocodes::create::handler)
                .push(Router::with_path("{id}").delete(promocodes::delete::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{id}").delete(orders::delete::handler)),
        )
        .push(Router::with_path("about").put(about::update::handler))
        .push(Router::with_path("data/{collection}").delete(bulk::purge::handler))
}
