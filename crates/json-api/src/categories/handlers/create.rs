//! Create Category Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::categories::data::NewCategory;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    responses::ErrorResponse,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            name: request.name,
            slug: request.slug,
        }
    }
}

/// Create Category Handler
///
/// The new category is placed after the current last one.
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let app = depot.app_context()?;

    let category = app.categories
        .create_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/categories/{}", category.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}
