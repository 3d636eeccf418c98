//! Static product catalog
//!
//! The catalog is a read-only `{ "products": [...] }` JSON document. It is
//! parsed once at process start and treated as immutable for the lifetime
//! of the process; a malformed document is a startup error, never a
//! per-request one.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::Product;

/// Catalog document shipped inside the binary
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Read-only product reference data
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse a catalog from a JSON document string
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| Error::Catalog(format!("invalid catalog document: {}", e)))?;
        Ok(Self {
            products: doc.products,
        })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded product catalog: {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("embedded catalog must parse")
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses_and_is_nonempty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for product in catalog.products() {
            assert!(!product.id.is_empty());
            assert!(!product.name.is_empty());
            assert!(product.price > 0.0);
        }
    }

    #[test]
    fn test_builtin_product_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{"id": "x1", "name": "Test Kettle", "category": "Others", "price": 12.5}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name, "Test Kettle");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = Catalog::from_json("{\"products\": 42}").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }
}
