//! Shared driver for the `nested_to_table` and `table_to_nested` binaries.
//!
//! Both commands take a single filename, read the whole file, convert it and
//! write the result to stdout in one go. Diagnostics go to stderr only, so
//! nothing reaches stdout unless the conversion succeeded.

use std::ffi::OsString;
use std::io::{
    self,
    Write,
};
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::error::ConvertError;

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Missing filename argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Usage: {program} filename")]
pub struct UsageError {
    /// Program name as invoked (`argv[0]`)
    pub program: String,
}

/// Any failure that ends a command run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong command-line usage
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Reading, converting or writing failed
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as invoked
    pub program: String,

    /// Input file
    pub path: PathBuf,
}

impl Invocation {
    /// Parses `argv`: the program name followed by the input filename.
    ///
    /// Arguments after the filename are ignored.
    ///
    /// # Errors
    /// - ファイル名が指定されていない場合は [`UsageError`]
    pub fn from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().map_or_else(
            || env!("CARGO_PKG_NAME").to_string(),
            |arg| arg.to_string_lossy().into_owned(),
        );

        let Some(path) = args.next() else {
            return Err(UsageError { program });
        };

        Ok(Self { program, path: PathBuf::from(path) })
    }

    /// Reads the whole input file as UTF-8 text.
    ///
    /// # Errors
    /// - ファイル読み込みエラー（存在しない、読めない、UTF-8 でない）
    pub fn read_input(&self) -> Result<String, ConvertError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|err| ConvertError::io(&self.path, err))?;
        tracing::debug!("Read {} bytes from {:?}", content.len(), self.path);
        Ok(content)
    }
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `warn`. Calling this more
/// than once keeps the first subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init().is_err()
    {
        tracing::debug!("Log subscriber already installed");
    }
}

/// Runs a command against the process's stdout and stderr.
pub fn run<I, T, F>(args: I, convert: F) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&str) -> Result<String, ConvertError>,
{
    init_logging();
    run_with(args, convert, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Runs a command with explicit output streams.
///
/// On failure the diagnostic is written to `stderr`, `stdout` is left
/// untouched and [`ExitCode::FAILURE`] is returned.
pub fn run_with<I, T, F>(
    args: I,
    convert: F,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&str) -> Result<String, ConvertError>,
{
    match execute(args, convert, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Command failed: {err:?}");
            if writeln!(stderr, "{err}").is_err() {
                tracing::warn!("Failed to write diagnostic to stderr");
            }
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments, converts the input file and writes the output.
fn execute<I, T, F>(args: I, convert: F, stdout: &mut impl Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&str) -> Result<String, ConvertError>,
{
    let invocation = Invocation::from_args(args)?;
    let input = invocation.read_input()?;
    let output = convert(&input)?;

    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(ConvertError::Output)?;

    Ok(())
}
