//! Surface styling: raw host configuration and the sanitized [`Style`].
//!
//! The host widget hands over whatever its attribute system produced, which
//! may be missing, non-numeric or nonsensical. [`Style::from_config`] is the
//! single place those values are checked; every rejected value falls back to
//! its documented default and is logged, so construction never fails.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

/// A color as it appears in configuration.
///
/// Integers may be signed: Android packs opaque colors as negative ARGB
/// values (`-16777216` is opaque black). Anything else is kept as `Invalid`
/// so one bad attribute never rejects the whole configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Int(i64),
    Text(String),
    Invalid(serde_json::Value),
}

/// A stroke width as it appears in configuration: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthValue {
    Number(f64),
    Text(String),
    Invalid(serde_json::Value),
}

impl From<f64> for WidthValue {
    fn from(width: f64) -> Self {
        Self::Number(width)
    }
}

/// Unvalidated surface attributes, as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    /// Marker radius in surface units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<WidthValue>,
    /// Base paint color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<ColorValue>,
}

impl SurfaceConfig {
    /// Overlay `other` on top of `self`: fields present in `other` win.
    #[must_use]
    pub fn merged(self, other: SurfaceConfig) -> Self {
        Self {
            stroke_width: other.stroke_width.or(self.stroke_width),
            stroke_color: other.stroke_color.or(self.stroke_color),
        }
    }
}

/// Immutable drawing style shared read-only by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    stroke_width: f64,
    stroke_color: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self { stroke_width: DEFAULT_STROKE_WIDTH, stroke_color: DEFAULT_STROKE_COLOR }
    }
}

impl Style {
    /// Build a style from raw configuration, substituting defaults for
    /// anything missing or invalid.
    #[must_use]
    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self {
            stroke_width: sanitize_width(config.stroke_width.as_ref()),
            stroke_color: sanitize_color(config.stroke_color.as_ref()),
        }
    }

    /// Marker radius. Always finite and positive.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Base paint color.
    #[must_use]
    pub fn stroke_color(&self) -> Rgb {
        self.stroke_color
    }
}

fn sanitize_width(width: Option<&WidthValue>) -> f64 {
    let candidate = match width {
        None => return DEFAULT_STROKE_WIDTH,
        Some(WidthValue::Number(w)) => *w,
        Some(WidthValue::Text(text)) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        Some(WidthValue::Invalid(_)) => f64::NAN,
    };
    if candidate.is_finite() && candidate > 0.0 {
        return candidate;
    }
    tracing::warn!(stroke_width = ?width, fallback = DEFAULT_STROKE_WIDTH, "invalid stroke width");
    DEFAULT_STROKE_WIDTH
}

fn sanitize_color(color: Option<&ColorValue>) -> Rgb {
    match color {
        None => DEFAULT_STROKE_COLOR,
        Some(ColorValue::Int(value)) => match packed_color(*value) {
            Some(packed) => Rgb::from_u32(packed),
            None => {
                tracing::warn!(stroke_color = value, fallback = %DEFAULT_STROKE_COLOR, "stroke color out of range");
                DEFAULT_STROKE_COLOR
            }
        },
        Some(ColorValue::Text(text)) => match Rgb::parse(text) {
            Ok(rgb) => rgb,
            Err(error) => {
                tracing::warn!(%error, fallback = %DEFAULT_STROKE_COLOR, "invalid stroke color");
                DEFAULT_STROKE_COLOR
            }
        },
        Some(ColorValue::Invalid(value)) => {
            tracing::warn!(stroke_color = %value, fallback = %DEFAULT_STROKE_COLOR, "invalid stroke color");
            DEFAULT_STROKE_COLOR
        }
    }
}

/// Reinterpret a configured integer as packed ARGB. Negative values are
/// signed 32-bit ARGB; anything outside 32 bits is rejected.
fn packed_color(value: i64) -> Option<u32> {
    match (u32::try_from(value), i32::try_from(value)) {
        (Ok(unsigned), _) => Some(unsigned),
        (Err(_), Ok(signed)) => Some(u32::from_ne_bytes(signed.to_ne_bytes())),
        (Err(_), Err(_)) => None,
    }
}
