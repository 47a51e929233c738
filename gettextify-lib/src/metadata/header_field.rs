use strum::{EnumIter, IntoStaticStr};

/// The header lines written into a catalog header, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum HeaderField {
    #[strum(serialize = "Project-Id-Version")]
    ProjectIdVersion,

    #[strum(serialize = "Report-Msgid-Bugs-To")]
    ReportMsgidBugsTo,

    #[strum(serialize = "POT-Creation-Date")]
    PotCreationDate,

    #[strum(serialize = "PO-Revision-Date")]
    PoRevisionDate,

    #[strum(serialize = "Last-Translator")]
    LastTranslator,

    #[strum(serialize = "Language-Team")]
    LanguageTeam,

    /// Only written when a language is configured.
    #[strum(serialize = "Language")]
    Language,

    #[strum(serialize = "MIME-Version")]
    MimeVersion,

    #[strum(serialize = "Content-Type")]
    ContentType,

    #[strum(serialize = "Content-Transfer-Encoding")]
    ContentTransferEncoding,
}

impl HeaderField {
    /// The key as it appears in the header block.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }
}
