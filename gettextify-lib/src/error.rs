use core::error::Error;

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Failures reported while turning a translation table into an MO catalog.
///
/// `BadInput` and `BadOutput` abort the conversion. `MalformedRow` is
/// reported for a single row that was skipped; the conversion goes on.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input is missing, unreadable, or does not describe a catalog.
    #[error("bad input: {message}{}", cause(.source))]
    BadInput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The output target cannot be created or written.
    #[error("bad output: {message}{}", cause(.source))]
    BadOutput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A single input row could not be turned into an entry.
    #[error("skipping line {line}: {message}")]
    MalformedRow { line: u64, message: String },
}

impl ConvertError {
    #[must_use]
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn bad_input_with(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::BadInput {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub fn bad_output(message: impl Into<String>) -> Self {
        Self::BadOutput {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn bad_output_with(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::BadOutput {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub fn malformed_row(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// Returns `true` for errors that abort the conversion.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedRow { .. })
    }
}

/// Renders the underlying cause, if any, as a `: cause` suffix.
fn cause(source: &Option<BoxedSource>) -> String {
    source.as_ref().map_or_else(String::new, |s| format!(": {s}"))
}
