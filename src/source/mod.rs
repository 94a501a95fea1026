//! Input sources and argument resolution.
//!
//! Positional arguments map one-to-one onto [`InputSource`]s: a lone `-` is
//! standard input, anything else is a file path. With no arguments at all the
//! list is just standard input. Standard input is never read implicitly next
//! to file arguments.

mod concat;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub use concat::{ConcatSummary, Concatenator, READ_BUFFER_SIZE};

/// Argument that selects standard input.
pub const STDIN_ARG: &str = "-";

/// A single input: standard input or a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The process's standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Resolve one positional argument.
    pub fn from_arg(arg: impl Into<OsString>) -> Self {
        let arg = arg.into();
        if arg.as_os_str() == std::ffi::OsStr::new(STDIN_ARG) {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Returns true for standard input.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Path of a file source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered list of sources; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<InputSource>,
}

impl SourceList {
    /// Resolve positional arguments in order.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut sources: Vec<InputSource> = args.into_iter().map(InputSource::from_arg).collect();
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        Self { sources }
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Never true: no arguments resolve to standard input.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns true if standard input appears anywhere in the list.
    pub fn reads_stdin(&self) -> bool {
        self.sources.iter().any(InputSource::is_stdin)
    }

    /// Iterate over the sources in order.
    pub fn iter(&self) -> std::slice::Iter<'_, InputSource> {
        self.sources.iter()
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a InputSource;
    type IntoIter = std::slice::Iter<'a, InputSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
