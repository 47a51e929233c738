//! Catalog header metadata.
//!
//! [`HeaderMetadata`] is configuration, not stored data: the compiler renders
//! it into the translation of the synthetic header entry (the entry with an
//! empty source) when the catalog does not already carry one.

mod header_field;
mod header_metadata;

pub use header_field::HeaderField;
pub use header_metadata::{HeaderMetadata, TIMESTAMP_FORMAT};
