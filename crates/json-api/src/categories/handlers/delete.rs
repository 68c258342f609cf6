//! Delete Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    categories::errors::into_status_error,
    extensions::*,
    responses::{ErrorResponse, SuccessResponse},
};

/// Delete Category Handler
///
/// Products that reference the category are left in place.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, StatusError> {
    let app = depot.app_context()?;

    app.categories
        .delete_category(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SuccessResponse::ok()))
}
