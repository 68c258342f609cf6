//! Fix Categories Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use medovik_app::domain::bulk::CategoriesReset;

use crate::{bulk::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesFixedResponse {
    pub message: String,
    pub deleted: u64,
    pub inserted: u64,
}

impl From<CategoriesReset> for CategoriesFixedResponse {
    fn from(reset: CategoriesReset) -> Self {
        CategoriesFixedResponse {
            message: "Categories fixed".to_string(),
            deleted: reset.deleted,
            inserted: reset.inserted,
        }
    }
}

/// Fix Categories Handler
///
/// Drops every category and writes the canonical set back.
#[endpoint(tags("bulk"), summary = "Reset Canonical Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<CategoriesFixedResponse>, StatusError> {
    let app = depot.app_context()?;

    let reset = app.bulk
        .fix_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(reset.into()))
}
