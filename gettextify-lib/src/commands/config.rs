use crate::Result;
use crate::metadata::HeaderMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Log target for configuration loading
const LOG_TARGET: &str = "    config";

/// Name of the configuration file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "gettextify.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Field delimiter of the input table
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Values written into the catalog header
    #[serde(default)]
    pub header: HeaderMetadata,
}

const fn default_delimiter() -> char {
    ','
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `gettextify.toml` in `base_dir` is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading gettextify configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading gettextify configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        if let Err(e) = delimiter_byte(config.delimiter) {
            return Err(app_err!("invalid configuration file '{final_path}': {e}"));
        }

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

/// Convert a delimiter character into the byte the table reader splits on.
///
/// # Errors
///
/// Returns an error unless `delimiter` is a single-byte ASCII character other than a
/// double quote or a line break.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\r' | '\n') {
        return Err(app_err!("invalid delimiter {delimiter:?}: expected an ASCII character other than a quote or line break"));
    }

    u8::try_from(delimiter).into_app_err("delimiter is not a single byte")
}
