//! The TFlags byte for ANSi-family media.
//!
//! Only the lower five bits are assigned:
//!
//! ```text
//! bit  4   3   2   1   0
//!     AR1 AR0 LS1 LS0  NB
//! ```
//!
//! `NB` selects non-blink (iCE color) mode, `LS` the font letter
//! spacing, `AR` the display aspect ratio. Both two-bit groups reserve
//! the `11` value.

const NON_BLINK_MODE: u8 = 0b0000_0001;

const LETTER_SPACING_MASK: u8 = 0b0000_0110;
const LETTER_SPACING_8PX: u8 = 0b0000_0010;
const LETTER_SPACING_9PX: u8 = 0b0000_0100;

const ASPECT_RATIO_MASK: u8 = 0b0001_1000;
const ASPECT_RATIO_LEGACY: u8 = 0b0000_1000;
const ASPECT_RATIO_MODERN: u8 = 0b0001_0000;

/// Display aspect ratio preference, bits 3-4 of TFlags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AspectRatio {
    /// No preference (value 0).
    #[default]
    None,
    /// Legacy device aspect ratio, needs vertical stretching (value 1).
    Legacy,
    /// Modern square-pixel aspect ratio (value 2).
    Modern,
    /// Reserved bit pattern (value 3).
    Invalid,
}

/// Font letter spacing preference, bits 1-2 of TFlags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetterSpacing {
    /// No preference (value 0).
    #[default]
    None,
    /// Select the 8 pixel wide font variant (value 1).
    EightPixelFont,
    /// Select the 9 pixel wide font variant (value 2).
    NinePixelFont,
    /// Reserved bit pattern (value 3).
    Invalid,
}

/// Decoded TFlags byte for ANSi-family media.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiFlags {
    pub aspect_ratio: AspectRatio,
    pub letter_spacing: LetterSpacing,
    /// Non-blink mode: the eight background colors become sixteen.
    pub non_blink_mode: bool,
}

impl AnsiFlags {
    /// Decode from a flags byte. Bits above the assigned five are ignored.
    pub fn from_byte(byte: u8) -> Self {
        let letter_spacing = match byte & LETTER_SPACING_MASK {
            0 => LetterSpacing::None,
            LETTER_SPACING_8PX => LetterSpacing::EightPixelFont,
            LETTER_SPACING_9PX => LetterSpacing::NinePixelFont,
            _ => LetterSpacing::Invalid,
        };
        let aspect_ratio = match byte & ASPECT_RATIO_MASK {
            0 => AspectRatio::None,
            ASPECT_RATIO_LEGACY => AspectRatio::Legacy,
            ASPECT_RATIO_MODERN => AspectRatio::Modern,
            _ => AspectRatio::Invalid,
        };
        AnsiFlags {
            aspect_ratio,
            letter_spacing,
            non_blink_mode: byte & NON_BLINK_MODE != 0,
        }
    }

    /// Decode from an arbitrary integer; only the low eight bits count,
    /// negative input wraps two's-complement.
    pub fn from_int(value: i64) -> Self {
        Self::from_byte(value as u8)
    }

    /// Encode back to a flags byte. Reserved variants emit the `11`
    /// pattern they decoded from.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.non_blink_mode {
            byte |= NON_BLINK_MODE;
        }
        byte |= match self.letter_spacing {
            LetterSpacing::None => 0,
            LetterSpacing::EightPixelFont => LETTER_SPACING_8PX,
            LetterSpacing::NinePixelFont => LETTER_SPACING_9PX,
            LetterSpacing::Invalid => LETTER_SPACING_MASK,
        };
        byte |= match self.aspect_ratio {
            AspectRatio::None => 0,
            AspectRatio::Legacy => ASPECT_RATIO_LEGACY,
            AspectRatio::Modern => ASPECT_RATIO_MODERN,
            AspectRatio::Invalid => ASPECT_RATIO_MASK,
        };
        byte
    }
}

impl From<u8> for AnsiFlags {
    fn from(byte: u8) -> Self {
        AnsiFlags::from_byte(byte)
    }
}

impl From<AnsiFlags> for u8 {
    fn from(flags: AnsiFlags) -> u8 {
        flags.to_byte()
    }
}
