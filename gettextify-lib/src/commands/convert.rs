use super::Host;
use super::common::{ColorMode, LogLevel, error_prefix, init_logging, status};
use super::config::{Config, delimiter_byte};
use crate::Result;
use crate::metadata::HeaderMetadata;
use crate::mo::MoCompiler;
use crate::tabular::TableReader;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use clap::{Args, Parser};
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

/// Log target for the convert command
const LOG_TARGET: &str = "   convert";

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// CSV file with `msgid`, `msgstr` and optional `comment` columns
    #[arg(value_name = "INPUT")]
    pub input: Utf8PathBuf,

    /// Output MO file path
    #[arg(value_name = "OUTPUT")]
    pub output: Utf8PathBuf,

    /// Field delimiter of the input table (default is ',')
    #[arg(long, short = 'd', value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Path to configuration file (default is `gettextify.toml` when present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub header: HeaderArgs,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Header fields that override the configuration
#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
    /// Project-Id-Version header
    #[arg(long = "project-id", value_name = "VERSION", help_heading = "Header Metadata")]
    pub project_id_version: Option<String>,

    /// Report-Msgid-Bugs-To header
    #[arg(long = "bugs-to", value_name = "EMAIL", help_heading = "Header Metadata")]
    pub report_msgid_bugs_to: Option<String>,

    /// Last-Translator header
    #[arg(long = "translator", value_name = "NAME", help_heading = "Header Metadata")]
    pub last_translator: Option<String>,

    /// Language-Team header
    #[arg(long = "team", value_name = "NAME", help_heading = "Header Metadata")]
    pub language_team: Option<String>,

    /// Language code (e.g. ru, en)
    #[arg(long, value_name = "CODE", help_heading = "Header Metadata")]
    pub language: Option<String>,

    /// Charset declared in the Content-Type header
    #[arg(long, value_name = "NAME", help_heading = "Header Metadata")]
    pub charset: Option<String>,

    /// Content-Transfer-Encoding header
    #[arg(long = "transfer-encoding", value_name = "NAME", help_heading = "Header Metadata")]
    pub content_transfer_encoding: Option<String>,
}

impl HeaderArgs {
    fn apply_to(&self, metadata: &mut HeaderMetadata) {
        let overrides = [
            (&self.project_id_version, &mut metadata.project_id_version),
            (&self.report_msgid_bugs_to, &mut metadata.report_msgid_bugs_to),
            (&self.last_translator, &mut metadata.last_translator),
            (&self.language_team, &mut metadata.language_team),
            (&self.language, &mut metadata.language),
            (&self.charset, &mut metadata.charset),
            (&self.content_transfer_encoding, &mut metadata.content_transfer_encoding),
        ];

        for (value, field) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
    }
}

/// Convert a translation table into an MO file
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written
pub fn convert<H: Host>(host: &mut H, args: &ConvertArgs) -> Result<()> {
    init_logging(args.log_level);
    let use_colors = args.color.use_colors();

    match convert_inner(host, args, use_colors) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "{} {e:#}", error_prefix(use_colors));
            host.exit(1);
            Err(e)
        }
    }
}

fn convert_inner<H: Host>(host: &mut H, args: &ConvertArgs, use_colors: bool) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let delimiter = delimiter_byte(args.delimiter.unwrap_or(config.delimiter))?;

    let mut metadata = config.header;
    args.header.apply_to(&mut metadata);

    if !args.input.is_file() {
        bail!("input file '{}' not found", args.input);
    }

    let _ = writeln!(
        host.output(),
        "{} {} to {}...",
        status("Converting", use_colors),
        args.input,
        args.output
    );

    let outcome = TableReader::new(delimiter)
        .read_path(&args.input)
        .into_app_err_with(|| format!("reading translation table '{}'", args.input))?;

    let _ = writeln!(host.output(), "Found {} translation entries.", outcome.catalog.len());
    if !outcome.skipped.is_empty() {
        let _ = writeln!(host.error(), "Skipped {} malformed row(s).", outcome.skipped.len());
    }

    if let Some(dir) = args.output.parent()
        && !dir.as_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).into_app_err_with(|| format!("creating output directory '{dir}'"))?;
        log::debug!(target: LOG_TARGET, "Created output directory '{dir}'");
        let _ = writeln!(host.output(), "{} directory: {dir}", status("Created", use_colors));
    }

    let summary = MoCompiler::new(metadata)
        .compile_to_path(&outcome.catalog, &Local::now(), &args.output)
        .into_app_err_with(|| format!("writing MO file '{}'", args.output))?;

    log::info!(target: LOG_TARGET, "Compiled {} strings into '{}'", summary.string_count, args.output);
    let _ = writeln!(host.output(), "{} {}", status("MO file created successfully:", use_colors), args.output);

    Ok(())
}
