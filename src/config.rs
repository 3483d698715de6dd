//! Runtime configuration for the `cart-checkout` binary.
//!
//! Rule parameters are not configurable; only where the inputs come from
//! and how the result is printed.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::catalog::{load_cart, Catalog, SAMPLE_CART};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartSource {
    Ids(Vec<String>),
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// `None` means the built-in sample catalog
    pub catalog_path: Option<PathBuf>,
    pub cart: CartSource,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            cart: CartSource::Sample,
            output: OutputFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cart = match (cli.ids.is_empty(), cli.cart) {
            (false, Some(_)) => {
                return Err(Error::InvalidArgument(
                    "cart ids and --cart cannot be combined".to_string(),
                ))
            }
            (false, None) => CartSource::Ids(cli.ids),
            (true, Some(path)) => CartSource::File(path),
            (true, None) => CartSource::Sample,
        };

        Ok(Self {
            catalog_path: cli.catalog,
            cart,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            log_filter: cli.log,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::sample()),
        }
    }

    pub fn load_cart(&self) -> Result<Vec<String>> {
        match &self.cart {
            CartSource::Ids(ids) => Ok(ids.clone()),
            CartSource::File(path) => Ok(load_cart(path)?),
            CartSource::Sample => Ok(SAMPLE_CART.iter().map(|id| id.to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_to_sample_inputs() {
        let cli = Cli::parse_from(["cart-checkout"]);
        let config = CheckoutConfig::from_cli(cli).unwrap();

        assert_eq!(config.cart, CartSource::Sample);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.load_cart().unwrap().len(), SAMPLE_CART.len());
        assert_eq!(config.load_catalog().unwrap(), Catalog::sample());
    }

    #[test]
    fn test_ids_from_arguments() {
        let cli = Cli::parse_from(["cart-checkout", "--json", "001", "001"]);
        let config = CheckoutConfig::from_cli(cli).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.load_cart().unwrap(), vec!["001", "001"]);
    }

    #[test]
    fn test_cart_file_source() {
        let cli = Cli::parse_from(["cart-checkout", "--cart", "cart.json"]);
        let config = CheckoutConfig::from_cli(cli).unwrap();
        assert_eq!(config.cart, CartSource::File(PathBuf::from("cart.json")));
    }

    #[test]
    fn test_ids_and_cart_file_conflict() {
        let cli = Cli {
            ids: vec!["001".to_string()],
            catalog: None,
            cart: Some(PathBuf::from("cart.json")),
            json: false,
            log: "info".to_string(),
        };
        let err = CheckoutConfig::from_cli(cli).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
