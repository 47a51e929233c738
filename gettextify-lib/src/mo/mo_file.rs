use super::{MO_HEADER_SIZE, MO_MAGIC, MO_REVISION, StringDescriptor};
use crate::error::ConvertError;
use bytes::Bytes;

/// The 28-byte header block at the start of an MO file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
    pub magic: u32,
    pub revision: u32,
    pub string_count: u32,
    pub originals_table_offset: u32,
    pub translations_table_offset: u32,
    pub hash_table_size: u32,
    pub hash_table_offset: u32,
}

impl MoHeader {
    /// Decode the header block without checking it.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if `data` is shorter than the header block.
    pub fn read(data: &[u8]) -> Result<Self, ConvertError> {
        if data.len() < MO_HEADER_SIZE as usize {
            return Err(ConvertError::bad_input(format!(
                "invalid MO file: {} bytes is shorter than the {MO_HEADER_SIZE}-byte header",
                data.len()
            )));
        }

        let word = |index: usize| read_u32(data, index * 4).unwrap_or_default();

        Ok(Self {
            magic: word(0),
            revision: word(1),
            string_count: word(2),
            originals_table_offset: word(3),
            translations_table_offset: word(4),
            hash_table_size: word(5),
            hash_table_offset: word(6),
        })
    }
}

/// A parsed MO file.
///
/// Parsing checks that every string described by the offset tables lies inside the
/// file and is zero-terminated, so the accessors never fail afterwards.
#[derive(Debug, Clone)]
pub struct MoFile {
    data: Bytes,
    header: MoHeader,
    originals: Vec<StringDescriptor>,
    translations: Vec<StringDescriptor>,
}

impl MoFile {
    /// Parse a little-endian, revision 0 MO file.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the data is not a well-formed MO file.
    pub fn parse(data: impl Into<Bytes>) -> Result<Self, ConvertError> {
        let data = data.into();
        let header = MoHeader::read(&data)?;

        if header.magic != MO_MAGIC {
            if header.magic.swap_bytes() == MO_MAGIC {
                return Err(ConvertError::bad_input("unsupported MO file: big-endian byte order"));
            }
            return Err(ConvertError::bad_input(format!(
                "invalid MO file: expected magic 0x{MO_MAGIC:08X}, found 0x{:08X}",
                header.magic
            )));
        }

        if header.revision != MO_REVISION {
            return Err(ConvertError::bad_input(format!(
                "unsupported MO file: format revision {}",
                header.revision
            )));
        }

        let originals = read_table(&data, header.originals_table_offset, header.string_count, "originals")?;
        let translations = read_table(&data, header.translations_table_offset, header.string_count, "translations")?;

        Ok(Self {
            data,
            header,
            originals,
            translations,
        })
    }

    #[must_use]
    pub const fn header(&self) -> &MoHeader {
        &self.header
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    #[must_use]
    pub fn original(&self, index: usize) -> Option<&[u8]> {
        self.originals.get(index).map(|d| self.string(*d))
    }

    #[must_use]
    pub fn translation(&self, index: usize) -> Option<&[u8]> {
        self.translations.get(index).map(|d| self.string(*d))
    }

    /// Iterate over `(source, translation)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.originals
            .iter()
            .zip(&self.translations)
            .map(|(o, t)| (self.string(*o), self.string(*t)))
    }

    /// The translation of the empty source, which holds the catalog header.
    #[must_use]
    pub fn header_entry(&self) -> Option<&[u8]> {
        self.lookup(b"")
    }

    /// Find the translation of `source` by binary search over the originals table,
    /// the same way gettext runtimes do.
    #[must_use]
    pub fn lookup(&self, source: &[u8]) -> Option<&[u8]> {
        self.originals
            .binary_search_by(|d| self.string(*d).cmp(source))
            .ok()
            .and_then(|index| self.translation(index))
    }

    fn string(&self, descriptor: StringDescriptor) -> &[u8] {
        let start = descriptor.offset as usize;
        &self.data[start..start + descriptor.length as usize]
    }
}

fn read_table(data: &[u8], table_offset: u32, count: u32, name: &str) -> Result<Vec<StringDescriptor>, ConvertError> {
    let table_end = (count as usize)
        .checked_mul(8)
        .and_then(|size| size.checked_add(table_offset as usize));
    if table_end.is_none_or(|end| end > data.len()) {
        return Err(ConvertError::bad_input(format!(
            "invalid MO file: {name} table of {count} entries at offset {table_offset} lies outside the file"
        )));
    }

    let mut descriptors = Vec::with_capacity(count as usize);

    for index in 0..count as usize {
        let at = table_offset as usize + index * 8;
        let (Some(length), Some(offset)) = (read_u32(data, at), read_u32(data, at + 4)) else {
            return Err(ConvertError::bad_input(format!(
                "invalid MO file: {name} table entry {index} lies outside the file"
            )));
        };

        let end = offset as usize + length as usize;
        if data.get(end) != Some(&0) {
            return Err(ConvertError::bad_input(format!(
                "invalid MO file: {name} string {index} at offset {offset} is out of bounds or not zero-terminated"
            )));
        }

        descriptors.push(StringDescriptor { length, offset });
    }

    Ok(descriptors)
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Entry};
    use crate::mo::serialize;

    fn compiled(entries: Vec<Entry>) -> Vec<u8> {
        let mut buf = Vec::new();
        let _ = serialize(&Catalog::from(entries), &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_parse_reads_back_entries() {
        let data = compiled(vec![Entry::header("h"), Entry::new("a", "b", ""), Entry::new("c", "d", "")]);
        let mo = MoFile::parse(data).unwrap();

        assert_eq!(mo.len(), 3);
        assert_eq!(mo.header().magic, MO_MAGIC);
        assert_eq!(mo.header().hash_table_size, 0);
        assert_eq!(mo.original(1), Some(&b"a"[..]));
        assert_eq!(mo.translation(2), Some(&b"d"[..]));
        assert_eq!(mo.original(3), None);

        let pairs: Vec<_> = mo.iter().collect();
        let expected: [(&[u8], &[u8]); 3] = [(b"", b"h"), (b"a", b"b"), (b"c", b"d")];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_lookup_uses_sorted_table() {
        let data = compiled(vec![
            Entry::header("hdr"),
            Entry::new("apple", "яблоко", ""),
            Entry::new("banana", "банан", ""),
            Entry::new("cherry", "вишня", ""),
        ]);
        let mo = MoFile::parse(data).unwrap();

        assert_eq!(mo.lookup(b"banana"), Some("банан".as_bytes()));
        assert_eq!(mo.lookup(b"cherry"), Some("вишня".as_bytes()));
        assert_eq!(mo.lookup(b"durian"), None);
        assert_eq!(mo.header_entry(), Some(&b"hdr"[..]));
    }

    #[test]
    fn test_parse_rejects_short_data() {
        let err = MoFile::parse(vec![0xDE_u8, 0x12, 0x04]).unwrap_err();
        assert!(matches!(err, ConvertError::BadInput { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_magic() {
        let mut data = compiled(vec![Entry::header("h")]);
        data[0] = 0;
        let err = MoFile::parse(data).unwrap_err();
        assert!(err.to_string().contains("expected magic"));
    }

    #[test]
    fn test_parse_rejects_big_endian() {
        let mut data = compiled(vec![Entry::header("h")]);
        data[..4].copy_from_slice(&MO_MAGIC.to_be_bytes());
        let err = MoFile::parse(data).unwrap_err();
        assert!(err.to_string().contains("big-endian"));
    }

    #[test]
    fn test_parse_rejects_other_revision() {
        let mut data = compiled(vec![Entry::header("h")]);
        data[4..8].copy_from_slice(&1_u32.to_le_bytes());
        let err = MoFile::parse(data).unwrap_err();
        assert!(err.to_string().contains("revision 1"));
    }

    #[test]
    fn test_parse_rejects_truncated_strings() {
        let mut data = compiled(vec![Entry::header("header text")]);
        data.truncate(data.len() - 3);
        assert!(MoFile::parse(data).is_err());
    }

    #[test]
    fn test_parse_rejects_string_count_beyond_file() {
        let data: Vec<u8> = [MO_MAGIC, MO_REVISION, u32::MAX, 28, 28, 0, 28]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();

        let err = MoFile::parse(data).unwrap_err();
        assert!(matches!(err, ConvertError::BadInput { .. }));
        assert!(err.to_string().contains("lies outside the file"));
    }

    #[test]
    fn test_parse_rejects_table_offset_beyond_file() {
        let mut data = compiled(vec![Entry::header("h")]);
        data[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = MoFile::parse(data).unwrap_err();
        assert!(matches!(err, ConvertError::BadInput { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_terminator() {
        let mut data = compiled(vec![Entry::header("h"), Entry::new("a", "b", "")]);
        let last = data.len() - 1;
        data[last] = b'x';
        assert!(MoFile::parse(data).is_err());
    }
}
