//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use urbanaura_app::domain::products::models::{ProductFilter, ProductSort};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Lists products, optionally only one `category`. `sortBy=asc|desc` orders
/// them by identifier; any other value keeps insertion order.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        category: category.into_inner().filter(|category| !category.is_empty()),
        sort: req
            .query::<String>("sortBy")
            .as_deref()
            .and_then(ProductSort::from_query),
    };

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
