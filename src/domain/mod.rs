// ============================================================================
// Domain Layer - catalog and order types
// ============================================================================
//
// Each area has its own subdirectory with value objects and the operations
// that build them. Discount rules live in `crate::pricing`.
//
// ============================================================================

pub mod catalog;
pub mod order;
