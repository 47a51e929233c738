//! Command dispatch logic for gettextify

use super::{ConvertArgs, convert};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::app_err;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gettextify", version, author, long_about = None)]
#[command(about = "Compile CSV translation tables into gettext MO files")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

/// Parse command-line arguments and run the conversion
///
/// Usage problems are reported through `host` and end with `host.exit` using clap's
/// exit code. `--help` and `--version` print to the host output and succeed.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the conversion fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            if e.use_stderr() {
                let _ = write!(host.error(), "{e}");
            } else {
                let _ = write!(host.output(), "{e}");
            }

            host.exit(code);
            if code == 0 {
                return Ok(());
            }
            return Err(app_err!("invalid command line"));
        }
    };

    convert(host, &cli.convert)
}
