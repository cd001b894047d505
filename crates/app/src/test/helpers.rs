//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            models::{CartItem, CartItemUuid, NewCartItem},
        },
        orders::models::{NewOrder, OrderStatus, OrderUuid},
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, Product, ProductDetails, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    title: &str,
    category: &str,
    price: u64,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            title: title.to_string(),
            sub_title: None,
            category: category.to_string(),
            price,
            details: ProductDetails::new(),
        })
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    user_email: &str,
    product: ProductUuid,
    quantity: u32,
) -> Result<CartItem, CartsServiceError> {
    ctx.carts
        .add_item(NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: product,
            user_email: user_email.to_string(),
            quantity,
        })
        .await
}

pub(crate) fn new_order(email: &str, price: u64) -> NewOrder {
    NewOrder {
        uuid: OrderUuid::new(),
        email: email.to_string(),
        transaction_id: None,
        price,
        items: Vec::new(),
        status: OrderStatus::Pending,
        date: None,
    }
}
