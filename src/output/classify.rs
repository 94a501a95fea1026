//! Code point classification.
//!
//! Every decoded code point lands in exactly one [`CharClass`]. The tables
//! here are plain ranges so the behavior does not depend on any escape
//! grammar or on the host's locale.

use super::SanitizerOptions;

/// Classification of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Displayed as-is.
    Printable,
    /// Whitespace control kept verbatim (newline, plus opt-in tab/CR).
    AllowedWhitespace,
    /// Anything that can change how a terminal interprets the stream.
    Control,
}

/// Unicode general category Cf (format characters), plus the line and
/// paragraph separators.
const FORMAT_RANGES: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x2028, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// Returns true for C1 control code points (U+0080..=U+009F).
#[inline]
pub fn is_c1(ch: char) -> bool {
    ('\u{80}'..='\u{9f}').contains(&ch)
}

/// Returns true for Unicode format characters and separators.
pub fn is_format(ch: char) -> bool {
    let cp = ch as u32;
    if cp < 0xAD {
        return false;
    }
    FORMAT_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Classify a code point under the given whitespace allow-list.
pub fn classify(ch: char, options: &SanitizerOptions) -> CharClass {
    match ch {
        '\n' => CharClass::AllowedWhitespace,
        '\t' if options.allow_tab => CharClass::AllowedWhitespace,
        '\r' if options.allow_carriage_return => CharClass::AllowedWhitespace,
        c if c.is_control() || is_format(c) => CharClass::Control,
        _ => CharClass::Printable,
    }
}
