//! Order HTTP Models

use std::str::FromStr;

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::orders::models::{Order, OrderItem, OrderStatus};

/// A cart line the order was placed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_item_uuid: Option<Uuid>,
    pub product_uuid: Uuid,
    pub quantity: u32,
}

impl From<OrderItemBody> for OrderItem {
    fn from(item: OrderItemBody) -> Self {
        OrderItem {
            cart_item_uuid: item.cart_item_uuid.map(Into::into),
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
        }
    }
}

impl From<OrderItem> for OrderItemBody {
    fn from(item: OrderItem) -> Self {
        OrderItemBody {
            cart_item_uuid: item.cart_item_uuid.map(Into::into),
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub email: String,

    /// Payment gateway transaction id
    pub transaction_id: Option<String>,

    /// Amount charged in pence/cents
    pub price: u64,
    pub items: Vec<OrderItemBody>,

    /// One of `pending`, `paid`, `processing`, `shipped`, `delivered`, `cancelled`
    pub status: String,
    pub date: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            email: order.email,
            transaction_id: order.transaction_id,
            price: order.price,
            items: order.items.into_iter().map(Into::into).collect(),
            status: order.status.to_string(),
            date: order.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<Order>> for OrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        OrdersResponse {
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}

pub(crate) fn parse_status(value: &str) -> Result<OrderStatus, StatusError> {
    OrderStatus::from_str(value).map_err(|error| StatusError::bad_request().brief(error.to_string()))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn unknown_status_is_a_bad_request() {
        assert_eq!(parse_status("Shipped").ok(), Some(OrderStatus::Shipped));
        assert_eq!(
            parse_status("lost").err().map(|error| error.code),
            Some(StatusCode::BAD_REQUEST)
        );
    }
}
