use bytes::Bytes;

/// A single source string with its translation and an optional annotation.
///
/// All three parts are raw byte strings. The annotation is carried along for
/// the caller's benefit but is never written into a compiled catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    source: Bytes,
    translation: Bytes,
    annotation: Bytes,
}

impl Entry {
    #[must_use]
    pub fn new(source: impl Into<Bytes>, translation: impl Into<Bytes>, annotation: impl Into<Bytes>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            annotation: annotation.into(),
        }
    }

    /// Create the catalog header entry, which has an empty source.
    #[must_use]
    pub fn header(translation: impl Into<Bytes>) -> Self {
        Self::new(Bytes::new(), translation, Bytes::new())
    }

    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// The translated string; empty means untranslated.
    #[must_use]
    pub fn translation(&self) -> &[u8] {
        &self.translation
    }

    #[must_use]
    pub fn annotation(&self) -> &[u8] {
        &self.annotation
    }

    /// Returns `true` if this entry carries the catalog header (its source is empty).
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.source.is_empty()
    }
}
