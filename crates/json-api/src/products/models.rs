//! Product HTTP Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use urbanaura_app::domain::products::models::Product;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub title: String,

    pub sub_title: Option<String>,

    pub category: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// Free-form product attributes
    #[salvo(schema(value_type = Object))]
    pub details: Map<String, Value>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            title: product.title,
            sub_title: product.sub_title,
            category: product.category,
            price: product.price,
            details: product.details,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        ProductsResponse {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
