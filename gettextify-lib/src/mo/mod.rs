//! Binary gettext catalogs (MO files).
//!
//! [`MoCompiler`] turns a [`Catalog`](crate::model::Catalog) into the binary
//! layout looked up by gettext runtimes, and [`MoFile`] reads that layout back.
//!
//! # Binary Layout
//!
//! All integers are little-endian `u32`. `N` is the number of strings,
//! including the header entry.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Header block (28 bytes)                              │
//! │   magic 0x950412DE, revision 0, N,                   │
//! │   originals table offset (28),                       │
//! │   translations table offset (28 + 8N),               │
//! │   hash table size (0), hash table offset (28 + 16N)  │
//! ├──────────────────────────────────────────────────────┤
//! │ Originals table: N × (length, offset)                │
//! ├──────────────────────────────────────────────────────┤
//! │ Translations table: N × (length, offset)             │
//! ├──────────────────────────────────────────────────────┤
//! │ String data                                          │
//! │   N sources, each followed by a zero byte            │
//! │   N translations, each followed by a zero byte       │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Sources are sorted by raw byte value, with the empty header source first.
//! Runtimes binary-search the originals table, so a wrong order or a wrong
//! offset corrupts lookups without any error at load time. No hash table is
//! emitted; runtimes fall back to binary search when its size is zero.

mod compiler;
mod layout;
mod mo_file;
mod mo_writer;

pub use compiler::{CompileSummary, MoCompiler, serialize};
pub use layout::{MO_HEADER_SIZE, MO_MAGIC, MO_REVISION, MoLayout, StringDescriptor};
pub use mo_file::{MoFile, MoHeader};

use mo_writer::MoWriter;
