//! Category Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use medovik_app::domain::categories::records::CategoryRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,

    /// Ascending display position
    pub order: i32,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.id.into_string(),
            name: category.name,
            slug: category.slug,
            order: category.order,
        }
    }
}
