// ============================================================================
// Coupons - concrete discount rules
// ============================================================================

pub mod pairwise;
pub mod volume;

pub use pairwise::*;
pub use volume::*;
