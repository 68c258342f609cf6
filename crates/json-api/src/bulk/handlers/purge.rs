//! Purge Collection Handler

use std::collections::BTreeMap;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::bulk::collections::{PurgeReport, PurgeScope};

use crate::{bulk::errors::into_status_error, extensions::*, responses::ErrorResponse};

/// Purge Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurgeResponse {
    pub success: bool,

    /// Rows removed, keyed by collection name
    pub deleted: BTreeMap<String, u64>,
}

impl From<PurgeReport> for PurgeResponse {
    fn from(report: PurgeReport) -> Self {
        PurgeResponse {
            success: true,
            deleted: report
                .deleted
                .into_iter()
                .map(|(collection, count)| (collection.as_str().to_string(), count))
                .collect(),
        }
    }
}

/// Purge Collection Handler
///
/// Deletes every record in `orders`, `products`, `categories`, `promocodes`
/// or `about`, or in all of them when given `all`.
#[endpoint(
    tags("bulk"),
    summary = "Purge Collection",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Collection purged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown collection", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
#[tracing::instrument(name = "bulk.purge", skip(collection, depot), err)]
pub(crate) async fn handler(
    collection: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PurgeResponse>, StatusError> {
    let app = depot.app_context()?;

    let scope = collection
        .into_inner()
        .parse::<PurgeScope>()
        .or_400("Unknown collection")?;

    let report = app.bulk
        .purge(scope)
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use smallvec::smallvec;
    use testresult::TestResult;

    use medovik_app::domain::bulk::{MockBulkService, collections::Collection};

    use crate::test_helpers::bulk_service;

    use super::*;

    fn make_service(bulk: MockBulkService) -> Service {
        bulk_service(bulk, Router::with_path("data/{collection}").delete(handler))
    }

    #[tokio::test]
    async fn test_purge_single_collection() -> TestResult {
        let mut bulk = MockBulkService::new();

        bulk.expect_purge()
            .once()
            .withf(|scope| *scope == PurgeScope::One(Collection::Orders))
            .return_once(|_| {
                Ok(PurgeReport {
                    deleted: smallvec![(Collection::Orders, 4)],
                })
            });

        let response: Value = TestClient::delete("http://example.com/data/orders")
            .send(&make_service(bulk))
            .await
            .take_json()
            .await?;

        assert_eq!(response, json!({ "success": true, "deleted": { "orders": 4 } }));

        Ok(())
    }

    #[tokio::test]
    async fn test_purge_all_reports_every_collection() -> TestResult {
        let mut bulk = MockBulkService::new();

        bulk.expect_purge()
            .once()
            .withf(|scope| *scope == PurgeScope::All)
            .return_once(|_| {
                Ok(PurgeReport {
                    deleted: Collection::ALL.into_iter().map(|c| (c, 1)).collect(),
                })
            });

        let response: PurgeResponse = TestClient::delete("http://example.com/data/all")
            .send(&make_service(bulk))
            .await
            .take_json()
            .await?;

        let collections: Vec<&str> = response.deleted.keys().map(String::as_str).collect();

        assert_eq!(
            collections,
            vec!["about", "categories", "orders", "products", "promocodes"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_purge_unknown_collection_returns_400() -> TestResult {
        let mut bulk = MockBulkService::new();

        bulk.expect_purge().never();

        let res = TestClient::delete("http://example.com/data/users")
            .send(&make_service(bulk))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
