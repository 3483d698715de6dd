use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::errors::CatalogError;
use super::value_objects::{Product, ProductId};

// ============================================================================
// Catalog - identifier to product mapping
// ============================================================================

/// The cart the drinks kiosk demo checks out when no other cart is given.
/// `006` is deliberately absent from the sample catalog.
pub const SAMPLE_CART: [&str; 6] = ["003", "002", "003", "003", "004", "006"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five-drink catalog used by the demo binary and the tests
    pub fn sample() -> Self {
        [
            ("001", "Cola", 45.0),
            ("002", "Royal", 50.0),
            ("003", "Sprite", 55.0),
            ("004", "Fanta", 60.0),
            ("005", "Lemon Tea", 35.0),
        ]
        .into_iter()
        .map(|(id, name, price)| (ProductId::new(id), Product::new(name, price)))
        .collect()
    }

    /// Parse a JSON object of `{ "<id>": { "name": .., "price": .. } }`.
    /// Prices are taken as-is, including zero or negative ones.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(CatalogError::MalformedCatalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn insert(&mut self, id: impl Into<ProductId>, product: Product) -> Option<Product> {
        self.products.insert(id.into(), product)
    }

    /// Exact-match lookup. A miss is an expected outcome, not an error.
    pub fn lookup(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<(ProductId, Product)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (ProductId, Product)>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

/// Parse a JSON array of product identifiers
pub fn cart_from_json_str(json: &str) -> Result<Vec<String>, CatalogError> {
    serde_json::from_str(json).map_err(CatalogError::MalformedCart)
}

pub fn load_cart(path: impl AsRef<Path>) -> Result<Vec<String>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    cart_from_json_str(&json)
}

// ============================================================================
// Unit Tests
// ============================================================================
