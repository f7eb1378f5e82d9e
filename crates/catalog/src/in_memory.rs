//! In-memory catalog for tests/dev and fixture-driven hosts.

use storefront_core::ProductId;

use crate::record::ProductRecord;
use crate::source::ProductSource;

/// The standard [`ProductSource`] over an owned product list.
///
/// Lookup is a linear scan; catalogs here are presentation lineups of a
/// handful of offerings, not inventories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<ProductRecord>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.iter()
    }
}

impl From<Vec<ProductRecord>> for InMemoryCatalog {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self::new(products)
    }
}

impl ProductSource for InMemoryCatalog {
    fn find_by_id(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|record| &record.id == id)
    }
}
