//! Multi-touch drawing surface: pointer tracking and marker rendering.
//!
//! The crate tracks any number of simultaneous touch or pointer contacts and
//! paints a colored marker at each one's current position. The host (a
//! browser page, a native view, the `touchpaint` replay tool) owns widget
//! lifecycle and event dispatch; it hands normalized [`input::ContactEvent`]s
//! to the engine and repaints whenever the engine asks for it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`pointer`] | Active contact set and snapshots |
//! | [`render`] | Surface trait, marker renderer, recording surface |
//! | [`input`] | Contact event types |
//! | [`style`] | Host configuration and the sanitized style |
//! | [`color`] | RGB values and color parsing |
//! | [`consts`] | Palette and style defaults |

pub mod color;
pub mod consts;
pub mod engine;
pub mod input;
pub mod pointer;
pub mod render;
pub mod style;
