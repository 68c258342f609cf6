//! Promo Code Records

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Promo Code Id
pub type PromocodeId = TypedId<PromocodeRecord>;

/// How a promo code's `discount_value` is applied to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is a percentage of the subtotal.
    Percent,

    /// `discount_value` is an absolute amount, capped at the subtotal.
    Fixed,
}

impl DiscountType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown discount type: {0}")]
pub struct UnknownDiscountType(String);

impl FromStr for DiscountType {
    type Err = UnknownDiscountType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percent" => Ok(Self::Percent),
            "fixed" => Ok(Self::Fixed),
            other => Err(UnknownDiscountType(other.to_string())),
        }
    }
}

/// Promo Code Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromocodeRecord {
    pub id: PromocodeId,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub max_uses: i32,
    pub current_uses: i32,
    pub is_active: bool,
}
