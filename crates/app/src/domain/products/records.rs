//! Product Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::categories::records::CategoryId, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// A price tier for one packaging weight, e.g. `250гр` at 1201.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPrice {
    pub weight: String,
    pub price: f64,
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub image: String,
    pub base_price: f64,
    pub weight_prices: Vec<WeightPrice>,
    pub created_at: Timestamp,
}
