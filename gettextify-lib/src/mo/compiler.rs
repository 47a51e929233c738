use super::{MoLayout, MoWriter};
use crate::error::ConvertError;
use crate::metadata::HeaderMetadata;
use crate::model::{Catalog, Entry};
use camino::Utf8Path;
use chrono::{DateTime, TimeZone};
use core::cmp::Ordering;
use core::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Log target for the compiler
const LOG_TARGET: &str = "  compiler";

/// Statistics about a compiled catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileSummary {
    /// Number of strings in each offset table, header entry included
    pub string_count: u32,

    pub bytes_written: u64,
}

/// Compiles catalogs into MO files, stamping a header from its metadata.
#[derive(Debug, Clone, Default)]
pub struct MoCompiler {
    metadata: HeaderMetadata,
}

impl MoCompiler {
    #[must_use]
    pub const fn new(metadata: HeaderMetadata) -> Self {
        Self { metadata }
    }

    #[must_use]
    pub const fn metadata(&self) -> &HeaderMetadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: HeaderMetadata) {
        self.metadata = metadata;
    }

    /// Build the sequence of entries that gets serialized.
    ///
    /// The result is a sorted copy of `catalog` whose first entry is the header. When
    /// `catalog` already holds an entry with an empty source, that entry is kept as-is
    /// and no metadata is rendered; otherwise a header is rendered from the metadata,
    /// stamped with `now`, and put in front.
    #[must_use]
    pub fn prepare<Tz: TimeZone>(&self, catalog: &Catalog, now: &DateTime<Tz>) -> Catalog
    where
        Tz::Offset: Display,
    {
        let mut entries = catalog.clone().into_entries();
        entries.sort_by(|a, b| compare_sources(a.source(), b.source()));

        if entries.first().is_none_or(|first| !first.is_header()) {
            log::debug!(target: LOG_TARGET, "Rendering catalog header from metadata");
            entries.insert(0, Entry::header(self.metadata.render(now)));
        } else {
            log::debug!(target: LOG_TARGET, "Keeping the catalog's own header entry");
        }

        Catalog::from(entries)
    }

    /// Prepare `catalog` and write the resulting MO file to `writer`.
    ///
    /// # Errors
    ///
    /// Returns `BadOutput` if the catalog is too large for the format or `writer` fails.
    pub fn compile<Tz: TimeZone, W: Write>(&self, catalog: &Catalog, now: &DateTime<Tz>, writer: &mut W) -> Result<CompileSummary, ConvertError>
    where
        Tz::Offset: Display,
    {
        let prepared = self.prepare(catalog, now);
        serialize(&prepared, writer)
    }

    /// Prepare `catalog` and write the resulting MO file to `path`, replacing any existing file.
    ///
    /// The file is flushed and synced before returning, and closed on every path.
    ///
    /// # Errors
    ///
    /// Returns `BadOutput` if the file cannot be created or written.
    pub fn compile_to_path<Tz: TimeZone>(&self, catalog: &Catalog, now: &DateTime<Tz>, path: &Utf8Path) -> Result<CompileSummary, ConvertError>
    where
        Tz::Offset: Display,
    {
        // a catalog too large to encode must fail before the existing file is truncated
        let prepared = self.prepare(catalog, now);
        let layout = MoLayout::new(prepared.entries())?;

        let file = File::create(path).map_err(|e| ConvertError::bad_output_with(format!("unable to create output file '{path}'"), e))?;
        let mut buf_writer = BufWriter::new(file);

        let summary = write_layout(&layout, &mut buf_writer)?;

        let file = buf_writer
            .into_inner()
            .map_err(|e| ConvertError::bad_output_with(format!("unable to flush output file '{path}'"), e.into_error()))?;
        file.sync_all()
            .map_err(|e| ConvertError::bad_output_with(format!("unable to sync output file '{path}'"), e))?;

        log::info!(
            target: LOG_TARGET,
            "Wrote {} strings ({} bytes) to '{path}'",
            summary.string_count,
            summary.bytes_written
        );

        Ok(summary)
    }
}

/// Write an already prepared catalog to `writer` in MO format, in the order given.
///
/// # Errors
///
/// Returns `BadOutput` if the catalog is too large for the format or `writer` fails.
pub fn serialize<W: Write>(prepared: &Catalog, writer: &mut W) -> Result<CompileSummary, ConvertError> {
    let layout = MoLayout::new(prepared.entries())?;
    write_layout(&layout, writer)
}

fn write_layout<W: Write>(layout: &MoLayout<'_>, writer: &mut W) -> Result<CompileSummary, ConvertError> {
    let mut mo_writer = MoWriter::new(writer);
    layout.write_to(&mut mo_writer)?;

    Ok(CompileSummary {
        string_count: layout.string_count(),
        bytes_written: mo_writer.position(),
    })
}

/// Raw byte order, except that the empty source always comes first.
fn compare_sources(a: &[u8], b: &[u8]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
