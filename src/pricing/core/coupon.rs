use crate::domain::order::Order;

// ============================================================================
// Coupon - the seam every discount rule implements
// ============================================================================
//
// Key Principles:
// 1. A coupon consumes an order set and returns a new one
// 2. Total quantity across the set is unchanged
// 3. Unit prices never go up
//
// The pipeline composes concrete coupons statically; there is no registry.
//
// ============================================================================

pub trait Coupon {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Apply the rule to a whole order set
    fn apply(&self, orders: Vec<Order>) -> Vec<Order>;
}

/// Units across an order set
pub fn total_quantity(orders: &[Order]) -> u64 {
    orders.iter().map(|o| u64::from(o.quantity)).sum()
}

/// Units in orders no per-unit rule has touched
pub fn untouched_quantity(orders: &[Order]) -> u64 {
    orders
        .iter()
        .filter(|o| o.is_untouched())
        .map(|o| u64::from(o.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Product, ProductId};
    use crate::domain::order::CouponLabel;

    #[test]
    fn test_quantity_counters() {
        let product = Product::new("Cola", 45.0);
        let orders = vec![
            Order::new(ProductId::new("001"), &product, 2),
            Order::new(ProductId::new("001"), &product, 4).activated_by(CouponLabel::PairwiseFull),
            Order::new(ProductId::new("001"), &product, 1),
        ];

        assert_eq!(total_quantity(&orders), 7);
        assert_eq!(untouched_quantity(&orders), 3);
        assert_eq!(untouched_quantity(&[]), 0);
    }
}
