//! Product catalog module.
//!
//! Owns the product record shape and the read-only lookup interface the
//! rendering crates consume. No IO: product lists are supplied by the host.

pub mod in_memory;
pub mod record;
pub mod source;

pub use in_memory::InMemoryCatalog;
pub use record::{Badge, ProductRecord};
pub use source::ProductSource;
