//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Product Index Handler
///
/// Returns products in insertion order, optionally narrowed to one category.
/// A blank `category_id` means no filter.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category_id: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let app = depot.app_context()?;

    let category = category_id
        .into_inner()
        .filter(|category| !category.is_empty())
        .map(Into::into);

    let products = app.products
        .list_products(category)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use medovik_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service, storage_error};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_without_filter_lists_everything() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|category| category.is_none())
            .return_once(|_| Ok(vec![make_product("p1"), make_product("p2")]));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let ids: Vec<&str> = response.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["p1", "p2"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_category_filter() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|category| category.as_ref().map(|id| id.as_str()) == Some("cat-bee"))
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?category_id=cat-bee")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_blank_category_filter_lists_everything() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|category| category.is_none())
            .return_once(|_| Ok(vec![make_product("p1")]));

        let response: Vec<ProductResponse> =
            TestClient::get("http://example.com/products?category_id=")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.len(), 1, "blank filter should list the full catalog");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_renders_weight_prices_and_timestamp() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Ok(vec![make_product("p1")]));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 1, "expected one product");
        assert_eq!(response[0].weight_prices.len(), 1);
        assert_eq!(response[0].created_at, "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
