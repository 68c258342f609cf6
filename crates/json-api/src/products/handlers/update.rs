//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, WeightPriceBody, into_weight_prices},
    },
    responses::ErrorResponse,
};

/// Update Product Request
///
/// Absent or `null` fields leave the stored value alone.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub weight_prices: Option<Vec<WeightPriceBody>>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            category_id: request.category_id.map(Into::into),
            image: request.image,
            base_price: request.base_price,
            weight_prices: request.weight_prices.map(into_weight_prices),
        }
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found", body = ErrorResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "No data to update", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_context()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_id", tracing::field::display(&id));

    let product = app.products
        .update_product(id.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use medovik_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_forwards_only_supplied_fields() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|id, update| {
                id.as_str() == "p1"
                    && *update
                        == ProductUpdate {
                            name: Some("X".to_string()),
                            ..ProductUpdate::default()
                        }
            })
            .return_once(|_, _| {
                let mut product = make_product("p1");

                product.name = "X".to_string();

                Ok(product)
            });

        let response: ProductResponse = TestClient::put("http://example.com/products/p1")
            .json(&json!({ "name": "X", "image": null }))
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.name, "X");
        assert_eq!(response.base_price, 1200.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_with_empty_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|_, update| update.is_empty())
            .return_once(|_, _| Err(ProductsServiceError::EmptyUpdate));

        let res = TestClient::put("http://example.com/products/p1")
            .json(&json!({}))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put("http://example.com/products/gone")
            .json(&json!({ "base_price": 900 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
