//! Reading translation tables.
//!
//! A translation table is delimited text with a header row naming its columns.
//! The `msgid` and `msgstr` columns are required and `comment` is optional.
//! Fields may be double-quoted, with `""` standing for a literal quote.
//!
//! ```text
//! msgid,msgstr,comment
//! Hello,Привет,Greeting
//! "She said ""Hello""","Она сказала ""Привет""",
//! ```

mod table_reader;

pub use table_reader::{DEFAULT_DELIMITER, ReadOutcome, TableReader};
