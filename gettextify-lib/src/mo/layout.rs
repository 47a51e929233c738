use super::MoWriter;
use crate::error::ConvertError;
use crate::model::Entry;
use std::io::Write;

pub const MO_MAGIC: u32 = 0x9504_12DE;
pub const MO_REVISION: u32 = 0;
pub const MO_HEADER_SIZE: u32 = 28; // 7 × u32

const DESCRIPTOR_SIZE: u32 = 8; // length + offset

/// Location of one string inside the string-data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDescriptor {
    /// Byte length, excluding the zero terminator
    pub length: u32,

    /// Absolute file offset of the first byte
    pub offset: u32,
}

/// Every offset of an MO file, computed before anything is written.
///
/// `strings` holds all sources followed by all translations, and
/// `descriptors[i]` locates `strings[i]`. Both the offset tables and the
/// string data are emitted from these two lists, so a table entry can never
/// disagree with where its string lands.
#[derive(Debug)]
pub struct MoLayout<'a> {
    strings: Vec<&'a [u8]>,
    descriptors: Vec<StringDescriptor>,
    string_count: u32,
    total_size: u32,
}

impl<'a> MoLayout<'a> {
    /// Lay out `entries` in the order given.
    ///
    /// # Errors
    ///
    /// Returns `BadOutput` if the catalog does not fit the 32-bit fields of the format.
    pub fn new(entries: &'a [Entry]) -> Result<Self, ConvertError> {
        let string_count = u32::try_from(entries.len()).map_err(|_| too_large())?;

        let strings: Vec<&[u8]> = entries
            .iter()
            .map(Entry::source)
            .chain(entries.iter().map(Entry::translation))
            .collect();

        let data_offset = string_count
            .checked_mul(2 * DESCRIPTOR_SIZE)
            .and_then(|tables| tables.checked_add(MO_HEADER_SIZE))
            .ok_or_else(too_large)?;

        let mut cursor = data_offset;
        let mut descriptors = Vec::with_capacity(strings.len());
        for s in &strings {
            let length = u32::try_from(s.len()).map_err(|_| too_large())?;
            descriptors.push(StringDescriptor { length, offset: cursor });
            cursor = cursor
                .checked_add(length)
                .and_then(|c| c.checked_add(1))
                .ok_or_else(too_large)?;
        }

        Ok(Self {
            strings,
            descriptors,
            string_count,
            total_size: cursor,
        })
    }

    #[must_use]
    pub const fn string_count(&self) -> u32 {
        self.string_count
    }

    #[must_use]
    pub const fn originals_table_offset(&self) -> u32 {
        MO_HEADER_SIZE
    }

    #[must_use]
    pub const fn translations_table_offset(&self) -> u32 {
        MO_HEADER_SIZE + self.string_count * DESCRIPTOR_SIZE
    }

    /// Points just past the translations table; no hash table is written there.
    #[must_use]
    pub const fn hash_table_offset(&self) -> u32 {
        self.data_offset()
    }

    /// First byte of the string-data region.
    #[must_use]
    pub const fn data_offset(&self) -> u32 {
        MO_HEADER_SIZE + 2 * self.string_count * DESCRIPTOR_SIZE
    }

    /// Size of the complete file in bytes.
    #[must_use]
    pub const fn total_size(&self) -> u32 {
        self.total_size
    }

    #[must_use]
    pub fn original_descriptors(&self) -> &[StringDescriptor] {
        &self.descriptors[..self.strings.len() / 2]
    }

    #[must_use]
    pub fn translation_descriptors(&self) -> &[StringDescriptor] {
        &self.descriptors[self.strings.len() / 2..]
    }

    pub(super) fn write_to<W: Write>(&self, writer: &mut MoWriter<'_, W>) -> Result<(), ConvertError> {
        writer.write_u32(MO_MAGIC)?;
        writer.write_u32(MO_REVISION)?;
        writer.write_u32(self.string_count)?;
        writer.write_u32(self.originals_table_offset())?;
        writer.write_u32(self.translations_table_offset())?;
        writer.write_u32(0)?; // hash table size
        writer.write_u32(self.hash_table_offset())?;

        // originals table, then translations table
        for descriptor in &self.descriptors {
            writer.write_descriptor(*descriptor)?;
        }

        for s in &self.strings {
            writer.write_terminated(s)?;
        }

        debug_assert_eq!(writer.position(), u64::from(self.total_size), "layout size matches bytes written");
        Ok(())
    }
}

fn too_large() -> ConvertError {
    ConvertError::bad_output("catalog is too large for the MO format")
}
