//! Update About Us Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    about::{errors::into_status_error, models::AboutBody},
    extensions::*,
    responses::ErrorResponse,
};

/// Update About Us Handler
///
/// Replaces the whole content block.
#[endpoint(
    tags("about"),
    summary = "Replace About Us",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Content replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AboutBody>,
    depot: &mut Depot,
) -> Result<Json<AboutBody>, StatusError> {
    let app = depot.app_context()?;

    let about = app.about
        .update_about(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(about.into()))
}
