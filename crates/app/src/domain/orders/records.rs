//! Order Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Order Id
pub type OrderId = TypedId<OrderRecord>;

/// A line item captured at checkout. It carries no product reference, so
/// later catalog edits never change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub promocode: Option<String>,
    pub created_at: Timestamp,
}
