//! Update Category Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::categories::data::CategoryUpdate;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    responses::ErrorResponse,
};

/// Update Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryRequest {
    pub name: String,
    pub slug: String,

    /// New display position; the current one is kept when omitted
    #[serde(default)]
    pub order: Option<i32>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            name: request.name,
            slug: request.slug,
            order: request.order,
        }
    }
}

/// Update Category Handler
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found", body = ErrorResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
#[tracing::instrument(
    name = "categories.update",
    skip(id, json, depot),
    fields(category_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let app = depot.app_context()?;
    let id = id.into_inner();

    tracing::Span::current().record("category_id", tracing::field::display(&id));

    let category = app.categories
        .update_category(id.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use medovik_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryRecord,
    };

    use crate::test_helpers::categories_service;

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_without_order_passes_none() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(|id, update| {
                id.as_str() == "c1"
                    && update.name == "Мёд"
                    && update.slug == "honey"
                    && update.order.is_none()
            })
            .return_once(|id, update| {
                Ok(CategoryRecord {
                    id,
                    name: update.name,
                    slug: update.slug,
                    order: 7,
                })
            });

        let response: CategoryResponse = TestClient::put("http://example.com/categories/c1")
            .json(&json!({ "name": "Мёд", "slug": "honey" }))
            .send(&make_service(categories))
            .await
            .take_json()
            .await?;

        assert_eq!(response.name, "Мёд");
        assert_eq!(response.order, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_forwards_order() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(|_, update| update.order == Some(2))
            .return_once(|id, update| {
                Ok(CategoryRecord {
                    id,
                    name: update.name,
                    slug: update.slug,
                    order: 2,
                })
            });

        let res = TestClient::put("http://example.com/categories/c1")
            .json(&json!({ "name": "Мёд", "slug": "honey", "order": 2 }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_category_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::put("http://example.com/categories/gone")
            .json(&json!({ "name": "Мёд", "slug": "honey" }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
