//! Product catalog
//!
//! Holds the products an employer offers, keyed by product code. Catalogs are
//! parsed from the JSON documents a product catalog provider publishes:
//!
//! ```json
//! {
//!   "voluntaryLife": {
//!     "name": "Voluntary Life Insurance",
//!     "type": "voluntaryLife",
//!     "costs": [{ "role": "ee", "price": 0.35, "costDivisor": 1000 }],
//!     "employerContribution": { "mode": "percentage", "contribution": 10 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use tracing::{debug, info};

use crate::error::PricingError;
use crate::product::Product;

/// Products keyed by product code
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON string
    ///
    /// Every product is validated before the catalog is returned.
    ///
    /// # Errors
    ///
    /// [`PricingError::Catalog`] if the document is not a valid catalog, or
    /// [`PricingError::InvalidProduct`] naming the first misconfigured product.
    pub fn from_json_str(json: &str) -> Result<Self, PricingError> {
        let products: BTreeMap<String, Product> =
            serde_json::from_str(json).map_err(|e| PricingError::Catalog(e.to_string()))?;

        Self::from_products(products)
    }

    /// Parses a catalog from a reader supplied by the caller
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PricingError> {
        let products: BTreeMap<String, Product> =
            serde_json::from_reader(reader).map_err(|e| PricingError::Catalog(e.to_string()))?;

        Self::from_products(products)
    }

    fn from_products(products: BTreeMap<String, Product>) -> Result<Self, PricingError> {
        let mut catalog = Self::new();
        for (code, product) in products {
            catalog.register(code, product)?;
        }

        info!(products = catalog.len(), "Loaded product catalog");
        Ok(catalog)
    }

    /// Validates and registers a product, replacing any product with the same code
    pub fn register(&mut self, code: impl Into<String>, product: Product) -> Result<(), PricingError> {
        let code = code.into();
        product.validate().map_err(|e| match e {
            PricingError::InvalidProduct(message) => {
                PricingError::invalid_product(format!("{}: {}", code, message))
            }
            other => other,
        })?;

        debug!(product_code = %code, product_type = %product.product_type, "Registered product");
        self.products.insert(code, product);
        Ok(())
    }

    /// Gets a product by code
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Gets a product by code, failing if it is not registered
    pub fn require(&self, code: &str) -> Result<&Product, PricingError> {
        self.get(code).ok_or_else(|| PricingError::product_not_found(code))
    }

    /// Product codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Serializes the catalog back to JSON
    pub fn to_json_string(&self) -> Result<String, PricingError> {
        serde_json::to_string_pretty(&self.products).map_err(|e| PricingError::Catalog(e.to_string()))
    }
}
