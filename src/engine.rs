use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

use crate::consts::{PALETTE, Palette};
use crate::input::{ContactEvent, ContactKind, ContactSample, PointerId};
use crate::pointer::{Change, PointerTracker};
use crate::render::{Surface, SurfaceRenderer};
use crate::style::{Style, SurfaceConfig};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Route further events for this contact to the surface.
    CapturePointer(PointerId),
    /// The contact is gone; stop routing its events.
    ReleasePointer(PointerId),
    /// Schedule a repaint. Emitted after every event.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub tracker: PointerTracker,
    renderer: SurfaceRenderer,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_style(Style::default(), &PALETTE)
    }
}

impl EngineCore {
    /// Build an engine from host configuration, sanitizing it first.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        Self::with_style(Style::from_config(config), &PALETTE)
    }

    #[must_use]
    pub fn with_style(style: Style, palette: &'static Palette) -> Self {
        Self { tracker: PointerTracker::new(), renderer: SurfaceRenderer::new(style, palette) }
    }

    // --- Input events ---

    /// Apply one contact event. The returned actions always end with
    /// [`Action::RenderNeeded`], whether or not anything changed.
    pub fn handle(&mut self, event: &ContactEvent) -> Vec<Action> {
        tracing::debug!(kind = ?event.kind, id = event.id, slot = event.slot, "contact event");

        let mut actions = Vec::with_capacity(2);
        match event.kind {
            ContactKind::Start => {
                if self.tracker.on_contact_start(event.id, event.position) == Change::Inserted {
                    actions.push(Action::CapturePointer(event.id));
                }
            }
            ContactKind::Move => {
                self.tracker.on_contact_move(&event.samples());
            }
            ContactKind::End | ContactKind::Cancel => {
                if self.tracker.on_contact_end(event.id) == Change::Removed {
                    actions.push(Action::ReleasePointer(event.id));
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Apply a move from a hover-capable pointer (a mouse or pen in range).
    ///
    /// Only moves for pointers that are in contact are dispatched. A move for
    /// any other pointer is a hover: it produces no actions and no redraw.
    pub fn handle_pointer_move(&mut self, event: &ContactEvent) -> Vec<Action> {
        if !self.tracker.contains(event.id) {
            tracing::trace!(id = event.id, "hover move ignored");
            return Vec::new();
        }
        self.handle(event)
    }

    /// The surface went away: every contact ends as if cancelled.
    pub fn detach(&mut self) -> Vec<Action> {
        let ids: Vec<PointerId> = self.tracker.ids().collect();
        self.tracker.clear();
        let mut actions: Vec<Action> = ids.into_iter().map(Action::ReleasePointer).collect();
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Render ---

    /// Draw the current frame to `surface`.
    ///
    /// # Errors
    ///
    /// Returns whatever error `surface` reports.
    pub fn render_to<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.renderer.render(surface, &self.tracker)
    }

    // --- Queries ---

    #[must_use]
    pub fn style(&self) -> &Style {
        self.renderer.style()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tracker.len()
    }
}

/// The full surface engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement, config: &SurfaceConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from(js_sys::Error::new("canvas has no 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> Vec<Action> {
        self.dispatch(&contact_event(ContactKind::Start, ev))
    }

    pub fn on_pointer_move(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let actions = self.core.handle_pointer_move(&contact_event(ContactKind::Move, ev));
        self.apply_capture(&actions);
        actions
    }

    pub fn on_pointer_up(&mut self, ev: &PointerEvent) -> Vec<Action> {
        self.dispatch(&contact_event(ContactKind::End, ev))
    }

    pub fn on_pointer_cancel(&mut self, ev: &PointerEvent) -> Vec<Action> {
        self.dispatch(&contact_event(ContactKind::Cancel, ev))
    }

    /// The canvas is being removed from the page.
    pub fn detach(&mut self) -> Vec<Action> {
        let actions = self.core.detach();
        self.apply_capture(&actions);
        actions
    }

    fn dispatch(&mut self, event: &ContactEvent) -> Vec<Action> {
        let actions = self.core.handle(event);
        self.apply_capture(&actions);
        actions
    }

    fn apply_capture(&self, actions: &[Action]) {
        for action in actions {
            let result = match *action {
                Action::CapturePointer(id) => self.canvas.set_pointer_capture(id),
                Action::ReleasePointer(id) => self.canvas.release_pointer_capture(id),
                Action::RenderNeeded => continue,
            };
            if let Err(error) = result {
                tracing::debug!(?error, ?action, "pointer capture change failed");
            }
        }
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.render_to(&mut self.ctx)
    }
}

/// Translate a DOM pointer event. Each pointer event describes exactly one
/// contact, so a move batch holds a single sample.
fn contact_event(kind: ContactKind, ev: &PointerEvent) -> ContactEvent {
    let id = ev.pointer_id();
    let x = f64::from(ev.offset_x());
    let y = f64::from(ev.offset_y());
    match kind {
        ContactKind::Start => ContactEvent::start(id, 0, x, y),
        ContactKind::Move => ContactEvent::move_batch(vec![ContactSample::new(id, 0, x, y)]),
        ContactKind::End => ContactEvent::end(id, 0, x, y),
        ContactKind::Cancel => ContactEvent::cancel(id, 0),
    }
}
