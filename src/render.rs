//! Rendering: draws one filled marker per active contact.
//!
//! The renderer only issues commands through the [`Surface`] trait, so the
//! same frame logic drives the browser canvas, the recording surface used by
//! tests and the CLI, and any other backend a host provides. It receives a
//! read-only view of the tracker and never mutates it.
//!
//! Backend failures propagate through the surface's own `Error` type. The
//! browser surface reports `JsValue`; the recording surface cannot fail.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;
use std::f64::consts::TAU;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgb;
use crate::consts::Palette;
use crate::input::Point;
use crate::pointer::PointerTracker;
use crate::style::Style;

/// A 2D drawing target.
pub trait Surface {
    type Error;

    /// Erase the previous frame.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface cannot be cleared.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw a filled circle.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the draw call fails.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<(), Self::Error>;
}

/// Paints the current frame from a tracker snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRenderer {
    style: Style,
    palette: &'static Palette,
}

impl SurfaceRenderer {
    #[must_use]
    pub fn new(style: Style, palette: &'static Palette) -> Self {
        Self { style, palette }
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    /// Clear `surface` and draw every active contact in snapshot order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `surface`; later markers are not drawn.
    pub fn render<S: Surface>(&self, surface: &mut S, tracker: &PointerTracker) -> Result<(), S::Error> {
        surface.clear()?;
        let radius = self.style.stroke_width();
        for entry in tracker.snapshot() {
            let color = self.palette[entry.palette_index];
            surface.fill_circle(entry.position, radius, color)?;
        }
        Ok(())
    }
}

// =============================================================
// Recording surface
// =============================================================

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    FillCircle { x: f64, y: f64, radius: f64, color: Rgb },
}

/// In-memory surface that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of circles drawn since the last take.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::FillCircle { .. })).count()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillCircle { x: center.x, y: center.y, radius, color });
        Ok(())
    }
}

// =============================================================
// Browser canvas
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        let Some(canvas) = self.canvas() else {
            return Err(js_sys::Error::new("2d context is not attached to a canvas").into());
        };
        self.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.set_fill_style_str(&color.to_css());
        self.fill();
        Ok(())
    }
}
