//! Cart checkout with a fixed coupon pipeline.
//!
//! A cart of product ids is grouped into one order per product, run through
//! the pairwise coupon (every second unit half price) and then the volume
//! coupon (flat reduction on untouched orders once enough untouched units
//! are in the cart), and summed.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pricing;

pub use domain::catalog::{Catalog, Price, Product, ProductId, SAMPLE_CART};
pub use domain::order::{group_by_cart, CouponLabel, Order};
pub use error::{Error, Result};
pub use pricing::{checkout, total, CheckoutPipeline, Receipt};
