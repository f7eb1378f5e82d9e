//! Read-only catalog lookup abstraction.
//!
//! The rendering core never owns product data; it looks records up through
//! this trait. Passing the source explicitly (instead of a module-level
//! constant) keeps every consumer testable with arbitrary fixtures.

use std::sync::Arc;

use storefront_core::ProductId;

use crate::record::ProductRecord;

/// Synchronous, read-only lookup against a fixed product list.
///
/// A miss is an expected outcome, not an error: callers skip unknown
/// identifiers silently.
pub trait ProductSource {
    fn find_by_id(&self, id: &ProductId) -> Option<&ProductRecord>;
}

impl<S> ProductSource for &S
where
    S: ProductSource + ?Sized,
{
    fn find_by_id(&self, id: &ProductId) -> Option<&ProductRecord> {
        (**self).find_by_id(id)
    }
}

impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    fn find_by_id(&self, id: &ProductId) -> Option<&ProductRecord> {
        (**self).find_by_id(id)
    }
}
