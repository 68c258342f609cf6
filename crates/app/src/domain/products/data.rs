//! Products Data

use crate::domain::{categories::records::CategoryId, products::records::WeightPrice};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub image: String,
    pub base_price: f64,
    pub weight_prices: Vec<WeightPrice>,
}

/// Product Update Data
///
/// Only `Some` fields overwrite the stored product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub image: Option<String>,
    pub base_price: Option<f64>,
    pub weight_prices: Option<Vec<WeightPrice>>,
}

impl ProductUpdate {
    /// True when the update would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.image.is_none()
            && self.base_price.is_none()
            && self.weight_prices.is_none()
    }
}
