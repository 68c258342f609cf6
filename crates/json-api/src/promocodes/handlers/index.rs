//! Promo Code Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    promocodes::{errors::into_status_error, models::PromocodeResponse},
};

/// Promo Code Index Handler
#[endpoint(
    tags("promocodes"),
    summary = "List Promo Codes",
    security(("basic_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PromocodeResponse>>, StatusError> {
    let app = depot.app_context()?;

    let promocodes = app.promocodes
        .list_promocodes()
        .await
        .map_err(into_status_error)?;

    Ok(Json(promocodes.into_iter().map(Into::into).collect()))
}
