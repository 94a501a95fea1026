//! # stcat
//!
//! Concatenate standard input and files with terminal control sequences
//! stripped.
//!
//! Text captured from logs or fetched from untrusted services can carry
//! escape sequences that move the cursor, set the window title, write the
//! clipboard or hide text once printed. `stcat` behaves like `cat`, except
//! every source passes through a sanitizer first.
//!
//! ## Features
//!
//! - **Binary-safe**: any byte sequence is accepted; invalid UTF-8 becomes
//!   U+FFFD instead of leaking raw bytes
//! - **Streaming**: code points and escape sequences split across reads are
//!   handled correctly
//! - **Complete removal**: CSI, OSC, DCS and other escape sequences are
//!   dropped whole, together with C0/C1 controls and Unicode format
//!   characters
//! - **cat semantics**: sources are joined in order with nothing inserted
//!
//! ## Quick Start
//!
//! ```
//! use std::io;
//! use stcat::{Concatenator, SanitizerOptions, SourceList};
//!
//! fn main() -> stcat::Result<()> {
//!     let sources = SourceList::from_args(["-"]);
//!     let mut stdin = io::Cursor::new(b"\x1b]0;pwned\x07hello\x1b[2J\n".to_vec());
//!     let mut out: Vec<u8> = Vec::new();
//!
//!     Concatenator::new(SanitizerOptions::default()).run(&sources, &mut stdin, &mut out)?;
//!
//!     assert_eq!(out, b"hello\n");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, StcatError};
pub use output::{sanitize, SanitizeStats, Sanitizer, SanitizerOptions};
pub use source::{ConcatSummary, Concatenator, InputSource, SourceList};
