//! Output sanitization for stripping terminal control sequences.

use serde::{Deserialize, Serialize};
use vte::{Params, Parser, Perform};

use super::classify::{classify, is_c1, CharClass};
use super::decoder::Utf8Decoder;
use super::escape::EscapeState;

/// Whitespace allow-list. Newline is always kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerOptions {
    /// Keep horizontal tabs.
    pub allow_tab: bool,
    /// Keep carriage returns.
    pub allow_carriage_return: bool,
}

/// Counters collected while sanitizing one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    /// Raw bytes consumed.
    pub bytes_in: usize,
    /// Invalid byte sequences replaced with U+FFFD.
    pub replaced: usize,
    /// Control and format code points deleted.
    pub removed_controls: usize,
    /// Escape sequences (CSI, OSC, DCS, ESC dispatch) deleted.
    pub removed_sequences: usize,
}

/// Streaming terminal-output sanitizer.
///
/// Bytes are decoded leniently, C1 controls are dropped, and what remains is
/// run through a VTE parser so that escape sequences are removed as a whole.
/// Decoder and parser state carry over between [`push`](Self::push) calls, so
/// chunk boundaries may fall anywhere, including inside a code point or an
/// escape sequence.
///
/// # Example
///
/// ```
/// use stcat::output::{Sanitizer, SanitizerOptions};
///
/// let mut sanitizer = Sanitizer::new(SanitizerOptions::default());
/// let mut text = sanitizer.push(b"\x1b[1mcaf\xc3");
/// text.push_str(&sanitizer.push(b"\xa9\x1b[0m\n"));
/// text.push_str(&sanitizer.finish());
/// assert_eq!(text, "café\n");
/// ```
pub struct Sanitizer {
    options: SanitizerOptions,
    decoder: Utf8Decoder,
    parser: Parser,
    escape: EscapeState,
    stats: SanitizeStats,
}

impl Sanitizer {
    /// Create a sanitizer in its initial state.
    pub fn new(options: SanitizerOptions) -> Self {
        Self {
            options,
            decoder: Utf8Decoder::new(),
            parser: Parser::new(),
            escape: EscapeState::Ground,
            stats: SanitizeStats::default(),
        }
    }

    /// Sanitize one chunk of raw bytes.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.stats.bytes_in += chunk.len();

        let mut decoded = String::with_capacity(chunk.len());
        self.stats.replaced += self.decoder.decode(chunk, &mut decoded);

        self.advance(&decoded)
    }

    /// Finish the stream.
    ///
    /// A trailing partial code point is emitted as one replacement marker;
    /// an unterminated escape sequence is discarded.
    pub fn finish(self) -> String {
        self.finish_with_stats().0
    }

    /// Finish the stream and return the final counters alongside the tail.
    pub fn finish_with_stats(mut self) -> (String, SanitizeStats) {
        let mut decoded = String::new();
        self.stats.replaced += self.decoder.finish(&mut decoded);

        let tail = self.advance(&decoded);
        (tail, self.stats)
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SanitizeStats {
        self.stats
    }

    fn advance(&mut self, decoded: &str) -> String {
        if decoded.is_empty() {
            return String::new();
        }

        let mut extractor = PlainTextExtractor::new(&self.options, decoded.len());
        let mut pending = String::with_capacity(decoded.len());

        for ch in decoded.chars() {
            // C1 controls never reach the parser, so they cannot open a sequence.
            if is_c1(ch) {
                self.stats.removed_controls += 1;
                continue;
            }

            // ESC and CSI sequences are 7-bit only. A non-ASCII code point
            // ends the open sequence and is text, not a parameter.
            if !ch.is_ascii() && self.escape.is_seven_bit_only() {
                self.parser.advance(&mut extractor, pending.as_bytes());
                pending.clear();
                self.parser = Parser::new();
                self.escape = EscapeState::Ground;
                extractor.removed_sequences += 1;
            }

            self.escape = self.escape.next(ch);
            pending.push(ch);
        }

        self.parser.advance(&mut extractor, pending.as_bytes());

        self.stats.removed_controls += extractor.removed_controls;
        self.stats.removed_sequences += extractor.removed_sequences;
        extractor.output
    }
}

/// Sanitize a complete byte sequence in one call.
pub fn sanitize(input: &[u8], options: SanitizerOptions) -> String {
    let mut sanitizer = Sanitizer::new(options);
    let mut output = sanitizer.push(input);
    output.push_str(&sanitizer.finish());
    output
}

/// Sanitize a string in one call.
pub fn sanitize_str(input: &str, options: SanitizerOptions) -> String {
    sanitize(input.as_bytes(), options)
}

/// VTE performer that keeps printable text and allowed whitespace.
struct PlainTextExtractor<'a> {
    options: &'a SanitizerOptions,
    output: String,
    removed_controls: usize,
    removed_sequences: usize,
}

impl<'a> PlainTextExtractor<'a> {
    fn new(options: &'a SanitizerOptions, capacity: usize) -> Self {
        Self {
            options,
            output: String::with_capacity(capacity),
            removed_controls: 0,
            removed_sequences: 0,
        }
    }

    fn keep(&mut self, c: char) {
        match classify(c, self.options) {
            CharClass::Printable | CharClass::AllowedWhitespace => self.output.push(c),
            CharClass::Control => self.removed_controls += 1,
        }
    }
}

impl Perform for PlainTextExtractor<'_> {
    fn print(&mut self, c: char) {
        self.keep(c);
    }

    fn execute(&mut self, byte: u8) {
        self.keep(char::from(byte));
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.removed_sequences += 1;
    }

    fn put(&mut self, _byte: u8) {
        // DCS payload
    }

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.removed_sequences += 1;
    }

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _action: char,
    ) {
        self.removed_sequences += 1;
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.removed_sequences += 1;
    }
}
