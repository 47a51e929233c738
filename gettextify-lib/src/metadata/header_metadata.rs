use super::HeaderField;
use chrono::{DateTime, TimeZone};
use core::fmt::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Format used for the `POT-Creation-Date` and `PO-Revision-Date` header lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Values written into the header entry of a compiled catalog.
///
/// No escaping is applied when rendering, so values must not contain line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderMetadata {
    pub project_id_version: String,
    pub report_msgid_bugs_to: String,
    pub last_translator: String,
    pub language_team: String,

    /// Language code such as `ru`; the `Language` line is omitted when empty
    pub language: String,

    pub charset: String,
    pub content_transfer_encoding: String,
}

impl Default for HeaderMetadata {
    fn default() -> Self {
        Self {
            project_id_version: "gettextify 1.0".into(),
            report_msgid_bugs_to: String::new(),
            last_translator: "gettextify".into(),
            language_team: String::new(),
            language: String::new(),
            charset: "UTF-8".into(),
            content_transfer_encoding: "8bit".into(),
        }
    }
}

impl HeaderMetadata {
    /// Render the header block, one `Key: Value` line per field, stamped with `now`.
    #[must_use]
    pub fn render<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let stamp = now.format(TIMESTAMP_FORMAT).to_string();

        let mut block = String::new();
        for field in HeaderField::iter() {
            if let Some(value) = self.value(field, &stamp) {
                block.push_str(field.key());
                block.push_str(": ");
                block.push_str(&value);
                block.push('\n');
            }
        }

        block
    }

    fn value<'a>(&'a self, field: HeaderField, stamp: &'a str) -> Option<Cow<'a, str>> {
        let value = match field {
            HeaderField::ProjectIdVersion => Cow::Borrowed(self.project_id_version.as_str()),
            HeaderField::ReportMsgidBugsTo => Cow::Borrowed(self.report_msgid_bugs_to.as_str()),
            HeaderField::PotCreationDate | HeaderField::PoRevisionDate => Cow::Borrowed(stamp),
            HeaderField::LastTranslator => Cow::Borrowed(self.last_translator.as_str()),
            HeaderField::LanguageTeam => Cow::Borrowed(self.language_team.as_str()),
            HeaderField::Language if self.language.is_empty() => return None,
            HeaderField::Language => Cow::Borrowed(self.language.as_str()),
            HeaderField::MimeVersion => Cow::Borrowed("1.0"),
            HeaderField::ContentType => Cow::Owned(format!("text/plain; charset={}", self.charset)),
            HeaderField::ContentTransferEncoding => Cow::Borrowed(self.content_transfer_encoding.as_str()),
        };

        Some(value)
    }
}
