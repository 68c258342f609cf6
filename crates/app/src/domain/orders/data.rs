//! Orders Data

use crate::domain::orders::records::OrderItem;

/// Tolerance when checking submitted totals against each other.
const TOTALS_TOLERANCE: f64 = 0.005;

/// New Order Data, as computed by the client at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub promocode: Option<String>,
}

impl NewOrder {
    /// The promo code to redeem, if a non-blank one was submitted.
    #[must_use]
    pub fn redeemed_code(&self) -> Option<&str> {
        self.promocode
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// True when `subtotal - discount` does not come out at `total`.
    #[must_use]
    pub fn totals_disagree(&self) -> bool {
        (self.subtotal - self.discount - self.total).abs() > TOTALS_TOLERANCE
    }
}
