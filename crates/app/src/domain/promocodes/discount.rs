//! Discount arithmetic and code lookup rules.

use smallvec::SmallVec;

use crate::domain::promocodes::{
    errors::PromocodesServiceError,
    records::{DiscountType, PromocodeRecord},
};

/// Spellings a submitted code is looked up under, in priority order.
///
/// The trimmed code uppercased, then lowercased, then as submitted. Variants
/// that coincide with an earlier one are dropped.
pub(crate) fn lookup_variants(code: &str) -> SmallVec<[String; 3]> {
    let trimmed = code.trim();

    let mut variants: SmallVec<[String; 3]> = SmallVec::new();

    for candidate in [
        trimmed.to_uppercase(),
        trimmed.to_lowercase(),
        trimmed.to_string(),
    ] {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }

    variants
}

/// Rejects codes that are switched off or have hit their usage cap.
pub(crate) fn ensure_redeemable(promocode: &PromocodeRecord) -> Result<(), PromocodesServiceError> {
    if !promocode.is_active {
        return Err(PromocodesServiceError::Inactive);
    }

    if promocode.current_uses >= promocode.max_uses {
        return Err(PromocodesServiceError::Exhausted);
    }

    Ok(())
}

/// Discount granted on `subtotal`, rounded to two decimal places.
///
/// A fixed discount never exceeds the subtotal.
#[must_use]
pub fn compute_discount(discount_type: DiscountType, discount_value: f64, subtotal: f64) -> f64 {
    let discount = match discount_type {
        DiscountType::Percent => subtotal * discount_value / 100.0,
        DiscountType::Fixed => discount_value.min(subtotal),
    };

    round_to_cents(discount)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
