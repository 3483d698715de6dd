use crate::domain::order::{CouponLabel, Order};
use crate::pricing::core::Coupon;

// ============================================================================
// Pairwise Coupon - every second unit of a product is half price
// ============================================================================
//
// An order of q >= 2 units becomes:
//   floor(q/2) units at the current price      [pairwise-full]
//   floor(q/2) units at half the current price [pairwise-discounted]
//   1 leftover unit when q is odd, labels left as they were
//
// ============================================================================

/// Orders below this quantity have nothing to pair
pub const MIN_PAIRABLE_QUANTITY: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseCoupon;

impl PairwiseCoupon {
    pub fn new() -> Self {
        Self
    }

    /// Split one order into its full-price, half-price and leftover parts
    pub fn split(&self, order: Order) -> Vec<Order> {
        if order.quantity < MIN_PAIRABLE_QUANTITY {
            return vec![order];
        }

        let half = order.quantity / 2;
        let has_leftover = order.quantity % 2 == 1;
        let half_price = order.discounted_price / 2.0;

        tracing::debug!(
            product_id = %order.id,
            quantity = order.quantity,
            pairs = half,
            has_leftover,
            "Splitting order into pairs"
        );

        let mut parts = Vec::with_capacity(3);
        parts.push(
            order
                .clone()
                .with_quantity(half)
                .activated_by(CouponLabel::PairwiseFull),
        );
        parts.push(
            order
                .clone()
                .with_quantity(half)
                .with_discounted_price(half_price)
                .activated_by(CouponLabel::PairwiseDiscounted),
        );
        if has_leftover {
            parts.push(order.with_quantity(1));
        }
        parts
    }
}

impl Coupon for PairwiseCoupon {
    fn name(&self) -> &'static str {
        "pairwise"
    }

    fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        orders
            .into_iter()
            .flat_map(|order| self.split(order))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
