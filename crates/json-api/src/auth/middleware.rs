//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::debug;

use crate::{extensions::*, state::State};

/// Verify the bearer token and store the caller's identity in the depot.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Unauthorized access"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let identity = match state.app.auth.authenticate_bearer(token) {
        Ok(identity) => identity,
        Err(source) => {
            debug!("rejected bearer token: {source}");

            res.render(StatusError::unauthorized().brief("Unauthorized access"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_identity(identity);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use urbanaura_app::auth::{AuthServiceError, Identity, MockAuthService, TokenError};

    use crate::test_helpers::{Mocks, TEST_EMAIL};

    use super::*;

    #[salvo::handler]
    async fn echo_identity(depot: &mut Depot, res: &mut Response) {
        let email = depot
            .identity_or_401()
            .map_or_else(|_| "missing".to_string(), |identity| identity.email.clone());

        res.render(email);
    }

    fn make_service(auth: MockAuthService) -> Service {
        Mocks {
            auth,
            ..Mocks::default()
        }
        .service(Router::new().hoop(handler).push(Router::new().get(echo_identity)))
    }

    fn invalid_token() -> AuthServiceError {
        let source = jsonwebtoken_error();

        AuthServiceError::InvalidToken(source)
    }

    fn jsonwebtoken_error() -> TokenError {
        urbanaura_app::auth::decode_token("garbage", b"secret")
            .err()
            .unwrap_or_else(|| unreachable!("garbage never decodes"))
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(invalid_token()));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_token_injects_identity() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| {
                Ok(Identity {
                    email: TEST_EMAIL.to_string(),
                    admin: false,
                })
            });

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, TEST_EMAIL);

        Ok(())
    }
}
