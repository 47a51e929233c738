//! In-memory translation catalog.
//!
//! A [`Catalog`] is an ordered list of [`Entry`] records. Insertion order is
//! preserved; the compiler sorts a copy when it serializes the catalog and
//! never touches the caller's data.

mod catalog;
mod entry;

pub use catalog::Catalog;
pub use entry::Entry;
