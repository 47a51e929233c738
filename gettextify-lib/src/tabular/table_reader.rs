use crate::error::ConvertError;
use crate::model::{Catalog, Entry};
use bytes::Bytes;
use camino::Utf8Path;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;

/// Log target for the table reader
const LOG_TARGET: &str = "    reader";

pub const DEFAULT_DELIMITER: u8 = b',';

const SOURCE_COLUMN: &[u8] = b"msgid";
const TRANSLATION_COLUMN: &[u8] = b"msgstr";
const ANNOTATION_COLUMN: &[u8] = b"comment";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The result of reading a translation table.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub catalog: Catalog,

    /// One `MalformedRow` error for every row that was skipped
    pub skipped: Vec<ConvertError>,
}

/// Reads delimited translation tables into a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReader {
    delimiter: u8,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    source: usize,
    translation: usize,
    annotation: Option<usize>,
}

impl Columns {
    fn locate(header: &ByteRecord) -> Result<Self, ConvertError> {
        let find = |name: &[u8]| {
            // the last matching column wins
            header
                .iter()
                .enumerate()
                .filter_map(|(index, field)| {
                    let field = if index == 0 { field.strip_prefix(UTF8_BOM).unwrap_or(field) } else { field };
                    (field.trim_ascii() == name).then_some(index)
                })
                .last()
        };

        match (find(SOURCE_COLUMN), find(TRANSLATION_COLUMN)) {
            (Some(source), Some(translation)) => Ok(Self {
                source,
                translation,
                annotation: find(ANNOTATION_COLUMN),
            }),
            _ => Err(ConvertError::bad_input("the table must have 'msgid' and 'msgstr' columns")),
        }
    }

    /// Number of fields a row needs before it can be read.
    fn required_fields(self) -> usize {
        self.source.max(self.translation).max(self.annotation.unwrap_or(0)) + 1
    }
}

impl TableReader {
    #[must_use]
    pub const fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub const fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    /// Read the table stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the file cannot be opened or does not describe a catalog.
    pub fn read_path(&self, path: &Utf8Path) -> Result<ReadOutcome, ConvertError> {
        let file = File::open(path).map_err(|e| ConvertError::bad_input_with(format!("unable to open input file '{path}'"), e))?;
        log::debug!(target: LOG_TARGET, "Reading translation table '{path}'");
        self.read(file)
    }

    /// Read a table from `input`.
    ///
    /// Blank lines are ignored. A row with too few fields is logged, recorded in
    /// [`ReadOutcome::skipped`], and skipped.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the input cannot be read, is empty, or lacks a required column.
    pub fn read(&self, input: impl Read) -> Result<ReadOutcome, ConvertError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut record = ByteRecord::new();
        if !reader.read_byte_record(&mut record).map_err(read_failed)? {
            return Err(ConvertError::bad_input("the table is empty"));
        }

        let columns = Columns::locate(&record)?;
        let required = columns.required_fields();

        let mut outcome = ReadOutcome::default();
        while reader.read_byte_record(&mut record).map_err(read_failed)? {
            let line = record.position().map_or(0, csv::Position::line);

            // only a whitespace-only line counts as blank; `,,` is a row of empty fields
            if record.len() == 1 && record.get(0).is_some_and(|field| field.trim_ascii().is_empty()) {
                continue;
            }

            if record.len() < required {
                let err = ConvertError::malformed_row(line, format!("expected at least {required} fields, found {}", record.len()));
                log::warn!(target: LOG_TARGET, "{err}");
                outcome.skipped.push(err);
                continue;
            }

            outcome.catalog.push(Self::entry(&record, columns));
        }

        log::info!(
            target: LOG_TARGET,
            "Read {} entries, skipped {} rows",
            outcome.catalog.len(),
            outcome.skipped.len()
        );

        Ok(outcome)
    }

    fn entry(record: &ByteRecord, columns: Columns) -> Entry {
        let field = |index: usize| record.get(index).unwrap_or_default();

        Entry::new(
            Bytes::copy_from_slice(field(columns.source).trim_ascii()),
            Bytes::copy_from_slice(field(columns.translation).trim_ascii()),
            columns.annotation.map_or_else(Bytes::new, |index| Bytes::copy_from_slice(field(index))),
        )
    }
}

fn read_failed(e: csv::Error) -> ConvertError {
    ConvertError::bad_input_with("unable to read the table", e)
}
