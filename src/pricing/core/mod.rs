// ============================================================================
// Pricing Core - generic discount rule abstractions
// ============================================================================
//
// No concrete rule lives here; see `pricing::coupons`.
//
// ============================================================================

pub mod coupon;

pub use coupon::{total_quantity, untouched_quantity, Coupon};
