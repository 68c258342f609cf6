//! Get Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    responses::ErrorResponse,
};

/// Get Category Handler
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let app = depot.app_context()?;

    let category = app.categories
        .get_category(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}
