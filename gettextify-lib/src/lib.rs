#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for gettextify
//!
//! This library reads translation tables stored as delimited text (CSV by default)
//! and compiles them into gettext MO catalogs that gettext runtimes can load.
//!
//! # Module Organization
//!
//! - [`model`]: Catalog entries as raw byte strings
//! - [`tabular`]: Reading delimited translation tables into a catalog
//! - [`metadata`]: The catalog header and its fields
//! - [`mo`]: Compiling catalogs to the MO format and reading MO files back
//! - [`error`]: The typed conversion error
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod error;
pub mod metadata;
pub mod mo;
pub mod model;
pub mod tabular;

pub use crate::commands::{Host, run};
pub use crate::error::ConvertError;
pub use crate::metadata::HeaderMetadata;
pub use crate::mo::{CompileSummary, MoCompiler, MoFile};
pub use crate::model::{Catalog, Entry};
pub use crate::tabular::{ReadOutcome, TableReader};
