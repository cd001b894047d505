//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use urbanaura_app::{
    auth::{Identity, MockAuthService},
    context::AppContext,
    database::SqlxError,
    domain::{
        carts::MockCartsService, favourites::MockFavouritesService, orders::MockOrdersService,
        products::MockProductsService, reviews::MockReviewsService,
    },
    payments::MockPaymentGateway,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_EMAIL: &str = "ada@example.com";
pub(crate) const OTHER_EMAIL: &str = "grace@example.com";
pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";

/// A storage failure for exercising 500 responses.
pub(crate) fn storage_error() -> SqlxError {
    SqlxError::PoolTimedOut
}

/// Service mocks backing a test server. Mocks without expectations fail the
/// test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) favourites: MockFavouritesService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) auth: MockAuthService,
    pub(crate) payments: MockPaymentGateway,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            favourites: Arc::new(self.favourites),
            orders: Arc::new(self.orders),
            reviews: Arc::new(self.reviews),
            auth: Arc::new(self.auth),
            payments: Arc::new(self.payments),
        })
    }

    /// Serve `route` without an authenticated caller.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as the regular user [`TEST_EMAIL`].
    pub(crate) fn user_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }

    /// Serve `route` as the admin [`ADMIN_EMAIL`].
    pub(crate) fn admin_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_admin)
                .push(route),
        )
    }
}

#[salvo::handler]
async fn inject_user(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_identity(Identity {
        email: TEST_EMAIL.to_string(),
        admin: false,
    });

    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(Identity {
        email: ADMIN_EMAIL.to_string(),
        admin: true,
    });

    ctrl.call_next(req, depot, res).await;
}
