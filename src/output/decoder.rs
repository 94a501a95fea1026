//! Streaming lenient UTF-8 decoding.

/// Marker substituted for each invalid byte sequence.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Incremental UTF-8 decoder.
///
/// Invalid sequences become one [`REPLACEMENT`] each, using the same
/// maximal-subpart rule as [`String::from_utf8_lossy`]. A code point cut off
/// at the end of a chunk is held back and completed by the next chunk, so the
/// result does not depend on where the chunk boundaries fall.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Valid prefix of an incomplete code point (at most 3 bytes).
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with no carried bytes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk` into `out`.
    ///
    /// Returns the number of replacement markers emitted.
    pub fn decode(&mut self, chunk: &[u8], out: &mut String) -> usize {
        let joined: Vec<u8>;
        let mut input: &[u8] = if self.pending.is_empty() {
            chunk
        } else {
            self.pending.extend_from_slice(chunk);
            joined = std::mem::take(&mut self.pending);
            &joined
        };

        let mut replaced = 0;
        loop {
            match std::str::from_utf8(input) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        out.push_str(text);
                    }
                    match err.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT);
                            replaced += 1;
                            input = &rest[len..];
                        }
                        None => {
                            self.pending.extend_from_slice(rest);
                            break;
                        }
                    }
                }
            }
        }
        replaced
    }

    /// Flush at end of input. A dangling partial code point becomes one
    /// replacement marker.
    ///
    /// Returns the number of replacement markers emitted (0 or 1).
    pub fn finish(&mut self, out: &mut String) -> usize {
        if self.pending.is_empty() {
            return 0;
        }
        self.pending.clear();
        out.push(REPLACEMENT);
        1
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
