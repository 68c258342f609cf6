//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use medovik_app::domain::orders::records::{OrderItem, OrderRecord};

/// A line item as it was in the cart at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemBody {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

impl From<OrderItemBody> for OrderItem {
    fn from(item: OrderItemBody) -> Self {
        OrderItem {
            name: item.name,
            weight: item.weight,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItem> for OrderItemBody {
    fn from(item: OrderItem) -> Self {
        OrderItemBody {
            name: item.name,
            weight: item.weight,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItemBody>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub promocode: Option<String>,

    /// ISO-8601 UTC creation time
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id.into_string(),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            discount: order.discount,
            total: order.total,
            promocode: order.promocode,
            created_at: order.created_at.to_string(),
        }
    }
}
