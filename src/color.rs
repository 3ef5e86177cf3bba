//! RGB color values and their configuration-string forms.
//!
//! Colors reach the surface from two places: the fixed marker palette and the
//! host's `strokeColor` attribute. The attribute may arrive as an integer
//! (possibly ARGB, as Android packs it) or as a string, so parsing is lenient
//! about notation but strict about digits. Anything that does not parse is
//! reported as a [`ColorError`] and the caller decides what to fall back to.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::Serialize;

/// An opaque 24-bit color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Rgb(u32);

/// Reasons a color string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color value")]
    Empty,
    #[error("invalid hex digits in color `{0}`")]
    InvalidDigits(String),
    #[error("color `{value}` has {len} hex digits; expected 3, 6 or 8")]
    BadLength { value: String, len: usize },
    #[error("color `{0}` is neither a decimal nor a hex value")]
    Unrecognized(String),
}

impl Rgb {
    pub const BLACK: Self = Self(0x00_00_00);
    pub const WHITE: Self = Self(0xFF_FF_FF);
    pub const BLUE: Self = Self(0x00_00_FF);
    pub const GREEN: Self = Self(0x00_FF_00);
    pub const MAGENTA: Self = Self(0xFF_00_FF);
    pub const CYAN: Self = Self(0x00_FF_FF);
    pub const GRAY: Self = Self(0x88_88_88);

    /// Build a color from a packed integer. Bits above the low 24 (an ARGB
    /// alpha channel) are dropped.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// CSS hex form (`#rrggbb`), accepted by `CanvasRenderingContext2d` fill styles.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Parse a color from a configuration string.
    ///
    /// Accepted forms:
    /// - `#rgb`, `#rrggbb`, `#aarrggbb`
    /// - `0xrrggbb`, `0xaarrggbb`
    /// - a bare decimal integer (`16777215`)
    /// - bare hex with 6 or 8 digits (`ffffff`) when it is not all decimal digits
    ///
    /// Alpha is dropped from 8-digit forms.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why the value was rejected.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(value, hex);
        }
        if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            return parse_hex(value, hex);
        }
        if value.bytes().all(|b| b.is_ascii_digit()) {
            return value
                .parse::<u32>()
                .map(Self::from_u32)
                .map_err(|_| ColorError::Unrecognized(value.to_owned()));
        }
        if matches!(value.len(), 6 | 8) && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return parse_hex(value, value);
        }
        Err(ColorError::Unrecognized(value.to_owned()))
    }
}

fn parse_hex(original: &str, hex: &str) -> Result<Rgb, ColorError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigits(original.to_owned()));
    }
    let digits = match hex.len() {
        // `#rgb` shorthand: each digit is doubled.
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => hex.to_owned(),
        len => return Err(ColorError::BadLength { value: original.to_owned(), len }),
    };
    u32::from_str_radix(&digits, 16)
        .map(Rgb::from_u32)
        .map_err(|_| ColorError::InvalidDigits(original.to_owned()))
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_css()
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}
