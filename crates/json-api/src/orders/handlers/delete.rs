//! Delete Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::errors::into_status_error,
    responses::{ErrorResponse, SuccessResponse},
};

/// Delete Order Handler
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, StatusError> {
    let app = depot.app_context()?;

    app.orders
        .delete_order(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SuccessResponse::ok()))
}
