// ============================================================================
// Catalog Domain - product records and identifier lookup
// ============================================================================

pub mod value_objects;
pub mod lookup;
pub mod errors;

pub use value_objects::*;
pub use lookup::*;
pub use errors::*;
