//! Output processing and sanitization.
//!
//! This module turns untrusted bytes into text that is safe to print:
//! - lenient, chunk-boundary-safe UTF-8 decoding
//! - escape sequence removal (CSI, OSC, DCS, plain ESC)
//! - control and format character removal
//!
//! # Example
//!
//! ```
//! use stcat::output::{sanitize, SanitizerOptions};
//!
//! let raw = b"\x1b]0;owned\x07\x1b[31mRed text\x1b[0m\n";
//! let clean = sanitize(raw, SanitizerOptions::default());
//! assert_eq!(clean, "Red text\n");
//! ```

mod classify;
mod decoder;
mod escape;
mod sanitizer;

pub use classify::{classify, CharClass};
pub use decoder::{Utf8Decoder, REPLACEMENT};
pub use sanitizer::{sanitize, sanitize_str, SanitizeStats, Sanitizer, SanitizerOptions};
