//! Promo Codes Data

use crate::domain::promocodes::records::DiscountType;

/// New Promo Code Data
///
/// Usage starts at zero and the code starts active.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromocode {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub max_uses: i32,
}

/// Outcome of a successful promo code check against a subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct PromocodeValidation {
    /// The code as stored, which may differ in case from the submitted one.
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub discount: f64,
}
