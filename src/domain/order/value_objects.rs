use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{Price, Product, ProductId};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Marks which discount rule produced or modified an order.
/// Only the presence of a label matters to later rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouponLabel {
    /// Full-price half of a pairwise split
    PairwiseFull,
    /// Half-price half of a pairwise split
    PairwiseDiscounted,
    /// Flat reduction from the volume rule
    VolumeDiscounted,
}

impl CouponLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponLabel::PairwiseFull => "pairwise-full",
            CouponLabel::PairwiseDiscounted => "pairwise-discounted",
            CouponLabel::VolumeDiscounted => "volume-discounted",
        }
    }
}

impl fmt::Display for CouponLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A quantity of one product at one unit price.
///
/// Rules never edit an order in place: they take it by value and hand back
/// new orders built with the `with_*` methods below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: ProductId,
    pub name: String,
    pub original_price: Price,
    pub discounted_price: Price,
    pub quantity: u32,
    pub activated_of_coupon: Vec<CouponLabel>,
}

impl Order {
    pub fn new(id: ProductId, product: &Product, quantity: u32) -> Self {
        Self {
            id,
            name: product.name.clone(),
            original_price: product.price,
            discounted_price: product.price,
            quantity,
            activated_of_coupon: Vec::new(),
        }
    }

    /// No per-unit rule has touched this order yet
    pub fn is_untouched(&self) -> bool {
        self.activated_of_coupon.is_empty()
    }

    pub fn line_total(&self) -> Price {
        self.discounted_price * f64::from(self.quantity)
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_discounted_price(mut self, price: Price) -> Self {
        self.discounted_price = price;
        self
    }

    pub fn activated_by(mut self, label: CouponLabel) -> Self {
        self.activated_of_coupon.push(label);
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
