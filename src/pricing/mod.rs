// ============================================================================
// Pricing - discount rules and the checkout pipeline
// ============================================================================
//
// Generic rule abstractions live in `core`, concrete rules in `coupons`.
// Domain types come from `crate::domain`.
//
// ============================================================================

pub mod core;
pub mod coupons;
pub mod checkout;

pub use checkout::*;
