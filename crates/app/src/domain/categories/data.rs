//! Category Data

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

/// Category Update Data
///
/// `name` and `slug` always replace the stored values; `order` is kept when
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub name: String,
    pub slug: String,
    pub order: Option<i32>,
}
