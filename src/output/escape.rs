//! Coarse mirror of the escape parser's state.
//!
//! `vte` does not expose where it is inside a sequence, and its callbacks
//! only fire once a sequence completes. The sanitizer needs to know when an
//! ESC or CSI sequence is still open, because those may only contain 7-bit
//! bytes and a non-ASCII code point there ends the sequence.

/// Where the byte stream currently is, as far as escape sequences go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeState {
    /// Plain text.
    #[default]
    Ground,
    /// After ESC.
    Escape,
    /// After ESC and one or more intermediate bytes (0x20..=0x2F).
    EscapeIntermediate,
    /// Inside a CSI sequence, before its final byte.
    Csi,
    /// Inside an OSC string.
    Osc,
    /// Inside a DCS, SOS, PM or APC string.
    ControlString,
}

impl EscapeState {
    /// True while only 7-bit bytes can continue the open sequence.
    pub fn is_seven_bit_only(self) -> bool {
        matches!(self, Self::Escape | Self::EscapeIntermediate | Self::Csi)
    }

    /// State after `ch`.
    pub fn next(self, ch: char) -> Self {
        use EscapeState::*;

        match (self, ch) {
            // CAN and SUB abort any sequence.
            (_, '\x18' | '\x1a') => Ground,
            (_, '\x1b') => Escape,
            (Ground, _) => Ground,
            (Escape, '[') => Csi,
            (Escape, ']') => Osc,
            (Escape, 'P' | 'X' | '^' | '_') => ControlString,
            (Escape | EscapeIntermediate, '\x20'..='\x2f') => EscapeIntermediate,
            (Escape | EscapeIntermediate, '\x30'..='\x7e') => Ground,
            (Csi, '\x40'..='\x7e') => Ground,
            (Osc, '\x07') => Ground,
            (state, _) => state,
        }
    }
}
