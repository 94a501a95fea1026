//! Command-line interface for stcat.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Positional sources, in order (`-` is standard input).
    pub sources: Vec<OsString>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Keep horizontal tabs.
    pub allow_tab: bool,
    /// Keep carriage returns.
    pub allow_cr: bool,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
///
/// The first item is the program name. A lone `-` is a positional source;
/// everything after `--` is positional.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.into());
            }
            Short('t') | Long("allow-tab") => {
                result.allow_tab = true;
            }
            Short('r') | Long("allow-cr") => {
                result.allow_cr = true;
            }
            Short('l') | Long("log-level") => {
                let value: String = parser.value()?.parse()?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidValue("log-level", value));
                }
                result.log_level = Some(value);
            }
            Value(val) => {
                result.sources.push(val);
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"stcat {version}
Concatenate files and standard input, stripping terminal escape sequences

USAGE:
    stcat [OPTIONS] [FILE]...

With no FILE, or when FILE is -, read standard input. Standard input is not
read when only files are given.

OPTIONS:
    -c, --config <FILE>     Path to configuration file (JSON)
    -t, --allow-tab         Keep horizontal tabs
    -r, --allow-cr          Keep carriage returns
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    STCAT_ALLOW_TAB         Keep horizontal tabs (true/false)
    STCAT_ALLOW_CR          Keep carriage returns (true/false)
    STCAT_LOG_LEVEL         Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Sanitize a captured log
    stcat session.log

    # Insert standard input between two files
    printf 'middle\n' | stcat head.txt - tail.txt

    # A file literally named -
    stcat -- ./-
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("stcat {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
