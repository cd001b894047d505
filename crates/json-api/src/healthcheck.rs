//! Healthcheck Handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Root handler
///
/// Plain-text liveness banner.
#[handler]
pub(crate) async fn root() -> &'static str {
    "UrbanAura server is running"
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .get(root)
                .push(Router::with_path("healthcheck").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn test_root_banner() -> TestResult {
        let body = TestClient::get("http://example.com/")
            .send(&make_service())
            .await
            .take_string()
            .await?;

        assert_eq!(body, "UrbanAura server is running");

        Ok(())
    }
}
