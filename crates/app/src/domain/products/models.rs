//! Product Models

use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Free-form product attributes (images, descriptions, colours, ...).
pub type ProductDetails = Map<String, Value>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub title: String,
    pub sub_title: Option<String>,
    pub category: String,

    /// Price in minor units (cents).
    pub price: u64,
    pub details: ProductDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub title: String,
    pub sub_title: Option<String>,
    pub category: String,
    pub price: u64,
    pub details: ProductDetails,
}

/// Partial product update. `None` fields keep their stored value and
/// `details` keys are merged into the stored attributes. An empty
/// `sub_title` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub category: Option<String>,
    pub price: Option<u64>,
    pub details: ProductDetails,
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Oldest identifier first.
    Ascending,

    /// Newest identifier first.
    Descending,
}

impl ProductSort {
    /// Parse the `sortBy` query value. Anything other than `asc`/`desc` means
    /// "no explicit sort".
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Product listing filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub sort: Option<ProductSort>,
}
