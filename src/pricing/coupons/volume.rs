use crate::domain::catalog::Price;
use crate::domain::order::{CouponLabel, Order};
use crate::pricing::core::{untouched_quantity, Coupon};

// ============================================================================
// Volume Coupon - flat reduction on untouched orders
// ============================================================================
//
// Two phases: count untouched units across the whole cart, then, if the
// count reaches the threshold, take a flat amount off the unit price of
// every untouched order. Prices are not clamped at zero.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeCoupon {
    /// Untouched units needed across the cart before the coupon applies
    pub min_untouched_units: u64,
    /// Amount taken off each eligible order's unit price
    pub reduction: Price,
}

impl Default for VolumeCoupon {
    fn default() -> Self {
        Self {
            min_untouched_units: 3,
            reduction: 5.0,
        }
    }
}

impl VolumeCoupon {
    pub fn is_triggered(&self, orders: &[Order]) -> bool {
        untouched_quantity(orders) >= self.min_untouched_units
    }
}

impl Coupon for VolumeCoupon {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        let eligible_units = untouched_quantity(&orders);
        if eligible_units < self.min_untouched_units {
            tracing::debug!(
                eligible_units,
                threshold = self.min_untouched_units,
                "Volume coupon not triggered"
            );
            return orders;
        }

        tracing::debug!(
            eligible_units,
            reduction = self.reduction,
            "Volume coupon triggered"
        );

        orders
            .into_iter()
            .map(|order| {
                if order.is_untouched() {
                    let price = order.discounted_price - self.reduction;
                    order
                        .with_discounted_price(price)
                        .activated_by(CouponLabel::VolumeDiscounted)
                } else {
                    order
                }
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
