//! Shared constants for the drawing surface.

use crate::color::Rgb;

// ── Palette ─────────────────────────────────────────────────────

/// Number of marker colors. Contacts beyond this reuse colors cyclically.
pub const PALETTE_SIZE: usize = 6;

/// Marker fill colors, assigned by a contact's position in iteration order.
pub const PALETTE: Palette = [
    Rgb::BLUE,
    Rgb::GREEN,
    Rgb::MAGENTA,
    Rgb::BLACK,
    Rgb::CYAN,
    Rgb::GRAY,
];

/// Fixed, ordered set of marker colors.
pub type Palette = [Rgb; PALETTE_SIZE];

// ── Style defaults ──────────────────────────────────────────────

/// Marker radius used when the host supplies no usable stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Base paint color used when the host supplies no usable stroke color.
pub const DEFAULT_STROKE_COLOR: Rgb = Rgb::WHITE;
