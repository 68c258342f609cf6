//! Admin gate middleware.

use std::sync::Arc;

use salvo::{http::header::WWW_AUTHENTICATE, prelude::*};
use tracing::error;

use medovik_app::auth::AuthServiceError;

use crate::{
    auth::credentials::extract_basic_credentials,
    extensions::*,
    observability::{AdminRejection, record_admin_rejection},
};

const CHALLENGE: &str = "Basic realm=\"medovik\"";

/// Let the request through only when it carries the configured admin pair.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(credentials) = extract_basic_credentials(req) else {
        reject(res, AdminRejection::MissingCredentials);
        ctrl.skip_rest();

        return;
    };

    let auth = match depot.app_context() {
        Ok(app) => Arc::clone(&app.auth),
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    match auth
        .authenticate_admin(&credentials.username, &credentials.password)
        .await
    {
        Ok(()) => {
            ctrl.call_next(req, depot, res).await;
        }
        Err(AuthServiceError::InvalidCredentials) => {
            reject(res, AdminRejection::WrongCredentials);
            ctrl.skip_rest();
        }
    }
}

fn reject(res: &mut Response, reason: AdminRejection) {
    record_admin_rejection(reason);

    if let Err(header_error) = res.add_header(WWW_AUTHENTICATE, CHALLENGE, true) {
        error!("failed to set authenticate challenge: {header_error}");
    }

    let brief = match reason {
        AdminRejection::MissingCredentials => "Missing or invalid Authorization header",
        AdminRejection::WrongCredentials => "Incorrect credentials",
    };

    res.render(StatusError::unauthorized().brief(brief));
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use medovik_app::auth::MockAuthService;

    use crate::test_helpers::auth_service;

    use super::*;

    #[salvo::handler]
    async fn guarded() -> &'static str {
        "admin only"
    }

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::new().hoop(handler).push(Router::new().get(guarded)))
    }

    fn basic(pair: &str) -> String {
        format!("Basic {}", STANDARD.encode(pair))
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401_with_challenge() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_admin().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        let challenge = res
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(challenge, Some(CHALLENGE));

        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_admin().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_credentials_return_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_admin()
            .once()
            .withf(|username, password| username == "admin" && password == "wrong")
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, basic("admin:wrong"), true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert!(
            res.headers().contains_key(WWW_AUTHENTICATE),
            "rejections should carry a Basic challenge"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_credentials_reach_the_handler() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_admin()
            .once()
            .withf(|username, password| username == "admin" && password == "hunter2")
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, basic("admin:hunter2"), true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "admin only");

        Ok(())
    }
}
