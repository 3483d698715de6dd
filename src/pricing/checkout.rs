use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::catalog::{Catalog, Price};
use crate::domain::order::{group_by_cart, Order};
use super::core::{total_quantity, Coupon};
use super::coupons::{PairwiseCoupon, VolumeCoupon};

// ============================================================================
// Checkout - fixed coupon pipeline and final sum
// ============================================================================
//
// Orchestrates: Cart -> Orders -> Pairwise -> Volume -> Total
//
// The pairwise coupon must run first: the volume coupon only looks at
// orders the pairwise coupon left untouched.
//
// ============================================================================

/// Sum of `discounted_price * quantity`; may be negative
pub fn total(orders: &[Order]) -> Price {
    orders.iter().map(Order::line_total).sum()
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutPipeline {
    pairwise: PairwiseCoupon,
    volume: VolumeCoupon,
}

impl CheckoutPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group the cart and run every coupon, returning the final order set
    pub fn apply_coupons<S: AsRef<str>>(&self, catalog: &Catalog, cart: &[S]) -> Vec<Order> {
        let orders = group_by_cart(catalog, cart);
        let units = total_quantity(&orders);

        let orders = self.run(&self.pairwise, orders);
        let orders = self.run(&self.volume, orders);

        debug_assert_eq!(total_quantity(&orders), units);
        orders
    }

    pub fn checkout<S: AsRef<str>>(&self, catalog: &Catalog, cart: &[S]) -> Price {
        total(&self.apply_coupons(catalog, cart))
    }

    /// Run the pipeline and keep the final order set for display
    pub fn receipt<S: AsRef<str>>(&self, catalog: &Catalog, cart: &[S]) -> Receipt {
        let checkout_id = Uuid::new_v4();
        let orders = self.apply_coupons(catalog, cart);
        let total = total(&orders);

        tracing::info!(
            %checkout_id,
            cart_entries = cart.len(),
            orders = orders.len(),
            total,
            "Checkout complete"
        );

        Receipt {
            checkout_id,
            checked_out_at: Utc::now(),
            orders,
            total,
        }
    }

    fn run<C: Coupon>(&self, coupon: &C, orders: Vec<Order>) -> Vec<Order> {
        let before = orders.len();
        let orders = coupon.apply(orders);
        tracing::debug!(
            coupon = coupon.name(),
            orders_in = before,
            orders_out = orders.len(),
            "Applied coupon"
        );
        orders
    }
}

/// Checkout a cart with the standard coupons
pub fn checkout<S: AsRef<str>>(catalog: &Catalog, cart: &[S]) -> Price {
    CheckoutPipeline::new().checkout(catalog, cart)
}

// ============================================================================
// Receipt
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub checkout_id: Uuid,
    pub checked_out_at: DateTime<Utc>,
    pub orders: Vec<Order>,
    pub total: Price,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checkout {}", self.checkout_id)?;
        for order in &self.orders {
            let labels: Vec<&str> = order.activated_of_coupon.iter().map(|l| l.as_str()).collect();
            writeln!(
                f,
                "  {:<4} {:<12} {:>3} x {:>8.2} (was {:>8.2}) = {:>9.2}  [{}]",
                order.id,
                order.name,
                order.quantity,
                order.discounted_price,
                order.original_price,
                order.line_total(),
                labels.join(", ")
            )?;
        }
        write!(f, "Total: {:.2}", self.total)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
