//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise
    pub status: String,

    /// `reachable` or `unreachable`
    pub database: String,
}

/// Healthcheck Handler
///
/// Pings the database; answers 503 while it is unreachable.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Database reachable", body = HealthResponse),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable", body = HealthResponse),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let app = depot.app_context()?;

    let response = match app.store.ping().await {
        Ok(()) => HealthResponse {
            status: "ok".to_string(),
            database: "reachable".to_string(),
        },
        Err(source) => {
            warn!("healthcheck database ping failed: {source}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            HealthResponse {
                status: "degraded".to_string(),
                database: "unreachable".to_string(),
            }
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use medovik_app::database::MockStoreHealth;

    use crate::test_helpers::{storage_error, store_service};

    use super::*;

    fn make_service(store: MockStoreHealth) -> Service {
        store_service(store, Router::with_path("healthcheck").get(handler))
    }

    #[tokio::test]
    async fn test_healthcheck_reports_reachable_database() -> TestResult {
        let mut store = MockStoreHealth::new();

        store.expect_ping().once().return_once(|| Ok(()));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(store))
            .await;

        let response: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.status, "ok");
        assert_eq!(response.database, "reachable");

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_unreachable_database_returns_503() -> TestResult {
        let mut store = MockStoreHealth::new();

        store
            .expect_ping()
            .once()
            .return_once(|| Err(storage_error()));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(store))
            .await;

        let response: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(response.status, "degraded");
        assert_eq!(response.database, "unreachable");

        Ok(())
    }
}
