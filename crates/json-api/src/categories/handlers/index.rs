//! Category Index Handler

use salvo::prelude::*;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
};

/// Category Index Handler
///
/// Returns every category, ascending by display order.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let app = depot.app_context()?;

    let categories = app.categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
