//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, parse_status},
    },
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// One of `pending`, `paid`, `processing`, `shipped`, `delivered`, `cancelled`
    pub status: String,
}

/// Update Order Status Handler
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let status = parse_status(&json.into_inner().status)?;

    let order = state
        .app
        .orders
        .update_status(uuid.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    info!(order = %order.uuid, %status, "order status updated");

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use urbanaura_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        models::{OrderStatus, OrderUuid},
    };

    use crate::{
        orders::make_order,
        test_helpers::{Mocks, TEST_EMAIL},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        Mocks {
            orders,
            ..Mocks::default()
        }
        .admin_service(Router::with_path("admin/orders/{uuid}/status").put(handler))
    }

    #[tokio::test]
    async fn test_update_status_success() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_status()
            .once()
            .withf(move |order, status| *order == uuid && *status == OrderStatus::Shipped)
            .return_once(move |_, status| Ok(make_order(uuid, TEST_EMAIL, status)));

        let mut res = TestClient::put(format!("http://example.com/admin/orders/{uuid}/status"))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "shipped");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_status().never();

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "teleported" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "cancelled" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
