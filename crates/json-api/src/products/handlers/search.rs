//! Search Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Search Products Handler
///
/// Matches `key` as a case-insensitive regular expression against the
/// category, title and sub-title of every product.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid search pattern"),
    ),
)]
pub(crate) async fn handler(
    key: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .search_products(&key.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use urbanaura_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::{products::make_product, test_helpers::Mocks};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        Mocks {
            products,
            ..Mocks::default()
        }
        .service(Router::with_path("products/search/{key}").get(handler))
    }

    #[tokio::test]
    async fn test_search_forwards_key() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|pattern| pattern == "shirt")
            .return_once(move |_| Ok(vec![make_product(uuid, "shirts", 100)]));

        let response: ProductsResponse = TestClient::get("http://example.com/products/search/shirt")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 1, "expected one match");

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_pattern_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidSearchPattern));

        let res = TestClient::get("http://example.com/products/search/(unclosed")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
