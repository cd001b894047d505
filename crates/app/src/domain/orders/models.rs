//! Order Models
//!
//! An order doubles as the payment record: it is saved once the customer has
//! paid, carrying the gateway's transaction id and the amount charged.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{carts::models::CartItemUuid, products::models::ProductUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        Self::Pending,
        Self::Paid,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Reference to the cart line an order was placed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_item_uuid: Option<CartItemUuid>,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub email: String,
    pub transaction_id: Option<String>,
    pub price: u64,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub date: Timestamp,
}

/// New Order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub email: String,
    pub transaction_id: Option<String>,
    pub price: u64,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,

    /// Defaults to the time the order is stored.
    pub date: Option<Timestamp>,
}

/// Result of finalizing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,

    /// Number of cart rows removed from the customer's cart.
    pub deleted_cart_items: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_parses_case_insensitively() -> TestResult {
        assert_eq!("shipped".parse::<OrderStatus>()?, OrderStatus::Shipped);
        assert_eq!(" Delivered ".parse::<OrderStatus>()?, OrderStatus::Delivered);

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = "lost".parse::<OrderStatus>();

        assert_eq!(result, Err(UnknownOrderStatus("lost".to_string())));
    }

    #[test]
    fn status_round_trips_through_display() -> TestResult {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn status_serializes_as_snake_case() -> TestResult {
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled)?, "\"cancelled\"");

        Ok(())
    }

    #[test]
    fn order_item_without_cart_reference_deserializes() -> TestResult {
        let product_uuid = ProductUuid::new();
        let item: OrderItem = serde_json::from_value(serde_json::json!({
            "product_uuid": product_uuid,
            "quantity": 2,
        }))?;

        assert_eq!(item.cart_item_uuid, None);
        assert_eq!(item.product_uuid, product_uuid);
        assert_eq!(item.quantity, 2);

        Ok(())
    }
}
