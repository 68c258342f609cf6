//! Reorder Categories Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::categories::records::CategoryId;

use crate::{categories::errors::into_status_error, extensions::*, responses::ErrorResponse};

/// Reorder Categories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesReorderedResponse {
    pub success: bool,

    /// Categories whose order was rewritten
    pub updated: u64,
}

/// Reorder Categories Handler
///
/// Takes category ids in their new display sequence. Each listed category
/// gets its zero-based position as its order; unknown ids are ignored.
#[endpoint(
    tags("categories"),
    summary = "Reorder Categories",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Categories reordered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Vec<String>>,
    depot: &mut Depot,
) -> Result<Json<CategoriesReorderedResponse>, StatusError> {
    let app = depot.app_context()?;

    let ordered: Vec<CategoryId> = json.into_inner().into_iter().map(Into::into).collect();

    let updated = app.categories
        .reorder_categories(ordered)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoriesReorderedResponse {
        success: true,
        updated,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use medovik_app::domain::categories::MockCategoriesService;

    use crate::test_helpers::categories_service;

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(
            categories,
            Router::with_path("categories/reorder").post(handler),
        )
    }

    #[tokio::test]
    async fn test_reorder_forwards_ids_in_sequence() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_reorder_categories()
            .once()
            .withf(|ordered| {
                ordered.iter().map(CategoryId::as_str).eq(["c3", "c1", "c2"])
            })
            .return_once(|_| Ok(3));

        let response: CategoriesReorderedResponse =
            TestClient::post("http://example.com/categories/reorder")
                .json(&json!(["c3", "c1", "c2"]))
                .send(&make_service(categories))
                .await
                .take_json()
                .await?;

        assert!(response.success);
        assert_eq!(response.updated, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_reorder_with_object_body_returns_400() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_reorder_categories().never();

        let res = TestClient::post("http://example.com/categories/reorder")
            .json(&json!({ "ids": ["c1"] }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
