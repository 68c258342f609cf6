//! Promo Code Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use medovik_app::domain::promocodes::records::{DiscountType, PromocodeRecord};

/// How the discount value applies to a subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DiscountKind {
    /// Percentage of the subtotal
    Percent,

    /// Fixed amount, capped at the subtotal
    Fixed,
}

impl From<DiscountKind> for DiscountType {
    fn from(kind: DiscountKind) -> Self {
        match kind {
            DiscountKind::Percent => DiscountType::Percent,
            DiscountKind::Fixed => DiscountType::Fixed,
        }
    }
}

impl From<DiscountType> for DiscountKind {
    fn from(kind: DiscountType) -> Self {
        match kind {
            DiscountType::Percent => DiscountKind::Percent,
            DiscountType::Fixed => DiscountKind::Fixed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromocodeResponse {
    pub id: String,
    pub code: String,
    pub discount_type: DiscountKind,
    pub discount_value: f64,
    pub max_uses: i32,
    pub current_uses: i32,
    pub is_active: bool,
}

impl From<PromocodeRecord> for PromocodeResponse {
    fn from(promocode: PromocodeRecord) -> Self {
        PromocodeResponse {
            id: promocode.id.into_string(),
            code: promocode.code,
            discount_type: promocode.discount_type.into(),
            discount_value: promocode.discount_value,
            max_uses: promocode.max_uses,
            current_uses: promocode.current_uses,
            is_active: promocode.is_active,
        }
    }
}
