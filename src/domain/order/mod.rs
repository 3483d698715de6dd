// ============================================================================
// Order Domain - per-product accounting units
// ============================================================================
//
// - Value objects (Order, CouponLabel)
// - Aggregator (cart + catalog -> orders)
//
// ============================================================================

pub mod value_objects;
pub mod aggregator;

pub use value_objects::*;
pub use aggregator::*;
