//! Seed Catalog Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use medovik_app::domain::bulk::SeedOutcome;

use crate::{bulk::errors::into_status_error, extensions::*};

/// Seed Response
///
/// Counts are present only when something was written.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SeedResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<u64>,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded => SeedResponse {
                message: "Data already seeded".to_string(),
                categories: None,
                products: None,
            },
            SeedOutcome::Seeded {
                categories,
                products,
            } => SeedResponse {
                message: "Data seeded successfully".to_string(),
                categories: Some(categories),
                products: Some(products),
            },
        }
    }
}

/// Seed Catalog Handler
///
/// Writes the starter categories and products when no categories exist yet.
#[endpoint(tags("bulk"), summary = "Seed Catalog")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SeedResponse>, StatusError> {
    let app = depot.app_context()?;

    let outcome = app.bulk
        .seed()
        .await
        .map_err(into_status_error)?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use medovik_app::domain::bulk::MockBulkService;

    use crate::test_helpers::bulk_service;

    use super::*;

    fn make_service(bulk: MockBulkService) -> Service {
        bulk_service(bulk, Router::with_path("seed").post(handler))
    }

    #[tokio::test]
    async fn test_seed_reports_counts() -> TestResult {
        let mut bulk = MockBulkService::new();

        bulk.expect_seed().once().return_once(|| {
            Ok(SeedOutcome::Seeded {
                categories: 6,
                products: 21,
            })
        });

        let response: Value = TestClient::post("http://example.com/seed")
            .send(&make_service(bulk))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response,
            json!({ "message": "Data seeded successfully", "categories": 6, "products": 21 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_on_populated_store_reports_already_seeded() -> TestResult {
        let mut bulk = MockBulkService::new();

        bulk.expect_seed()
            .once()
            .return_once(|| Ok(SeedOutcome::AlreadySeeded));

        let response: Value = TestClient::post("http://example.com/seed")
            .send(&make_service(bulk))
            .await
            .take_json()
            .await?;

        assert_eq!(response, json!({ "message": "Data already seeded" }));

        Ok(())
    }
}
