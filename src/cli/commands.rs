use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, debug_span, trace};

use crate::preview::{PreviewError, resolve_preview};

#[derive(Parser, Debug)]
#[command(name = "fzf-preview")]
#[command(about = "Print the decoded payload behind a fuzzy-finder selection", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Index file of `<index>\t<base64-payload>` lines
    #[arg(allow_hyphen_values = true)]
    pub index_file: Option<PathBuf>,

    /// Highlighted row, e.g. "12. git status"
    #[arg(allow_hyphen_values = true)]
    pub selection: Option<OsString>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}

impl Cli {
    /// Both positional arguments, or `None` when either is missing
    ///
    /// Only the key before the first `.` is ever interpreted, so non-UTF-8 selections are
    /// converted lossily.
    pub fn request(&self) -> Option<(&Path, String)> {
        let index_file = self.index_file.as_deref()?;
        let selection = self.selection.as_ref()?.to_string_lossy().into_owned();
        Some((index_file, selection))
    }
}

/// Run against the real process arguments and stdout
pub fn run() -> ExitCode {
    let stdout = io::stdout();
    run_from(std::env::args_os(), &mut stdout.lock())
}

/// Run with explicit `argv` (binary name first) and output sink
///
/// Always reports success. Anything that prevents a preview is logged at debug level and
/// produces no output.
pub fn run_from<I, T, W>(argv: I, out: &mut W) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    if let Err(err) = execute(argv, out) {
        match err.downcast_ref::<PreviewError>() {
            Some(preview) => debug!(reason = preview.reason(), "{preview}"),
            None => debug!("{err:#}"),
        }
    }

    ExitCode::SUCCESS
}

fn execute<I, T, W>(argv: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(argv).context("Failed to parse arguments")?;
    let (index_file, selection) = cli.request().ok_or(PreviewError::InsufficientArguments)?;

    let span = debug_span!("preview", path = %index_file.display(), selection = %selection);
    let _entered = span.enter();

    match resolve_preview(index_file, &selection) {
        Ok(text) => emit(out, &text),
        Err(err) => {
            debug!(reason = err.reason(), "{err}");
            Ok(())
        }
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).context("Failed to write preview")?;
    out.flush().context("Failed to flush preview")?;
    trace!(bytes = text.len(), "preview written");
    Ok(())
}
