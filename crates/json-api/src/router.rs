//! App Router

use salvo::Router;

use crate::{admin, auth, carts, favourites, healthcheck, orders, payments, products, reviews};

/// Routes anyone may call.
fn public_routes() -> Router {
    Router::new()
        .push(Router::with_path("jwt").post(auth::token::handler))
        .push(Router::with_path("products").get(products::index::handler))
        .push(Router::with_path("products/search/{key}").get(products::search::handler))
        .push(Router::with_path("products/{uuid}").get(products::get::handler))
        .push(Router::with_path("reviews").get(reviews::index::handler))
}

/// Order history and checkout, mounted under both `/orders` and `/payments`.
fn order_routes(prefix: &str) -> Router {
    Router::with_path(prefix)
        .post(orders::create::handler)
        .push(Router::with_path("{email}").get(orders::index::handler))
}

fn admin_routes() -> Router {
    Router::new()
        .hoop(auth::admin::handler)
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("admin")
                .push(Router::with_path("orders").get(admin::orders::handler))
                .push(Router::with_path("orders/{uuid}/status").put(admin::status::handler))
                .push(Router::with_path("payments").get(admin::payments::handler)),
        )
}

/// Routes that need a verified bearer token.
fn authenticated_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("cart")
                .post(carts::create::handler)
                .push(Router::with_path("{email}").get(carts::index::handler))
                .push(
                    Router::with_path("{uuid}")
                        .patch(carts::update::handler)
                        .delete(carts::delete::handler),
                ),
        )
        .push(
            Router::with_path("favourite")
                .post(favourites::create::handler)
                .push(Router::with_path("{email}").get(favourites::index::handler))
                .push(Router::with_path("{uuid}").delete(favourites::delete::handler)),
        )
        .push(order_routes("orders"))
        .push(order_routes("payments"))
        .push(
            Router::with_path("reviews")
                .post(reviews::create::handler)
                .push(Router::with_path("{uuid}").delete(reviews::delete::handler)),
        )
        .push(Router::with_path("create-payment-intent").post(payments::handler))
        .push(admin_routes())
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(healthcheck::root)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(public_routes())
        .push(authenticated_routes())
}
