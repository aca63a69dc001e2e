// crates/trellis-core/src/host.rs

use std::cell::Cell;

use glam::Vec2;

/// Surface and input state the tree polls during `update`.
///
/// Built-in behaviors never reach for globals; the host is passed down the
/// update traversal, so a scripted host can stand in for the real one.
pub trait HostSurface {
    /// Current drawable surface size in pixels.
    fn drawable_size(&self) -> Vec2;

    /// Current pointer position in surface coordinates.
    fn pointer_position(&self) -> Vec2;

    /// Whether the primary pointer button is held.
    fn primary_pressed(&self) -> bool;
}

/// A [`HostSurface`] whose state is set by the caller.
///
/// Backs tests and headless runs: share it via `Rc`, keep one handle for
/// poking state between frames and hand the other to the update loop.
#[derive(Debug)]
pub struct ScriptedHost {
    drawable: Cell<Vec2>,
    pointer: Cell<Vec2>,
    pressed: Cell<bool>,
}

impl ScriptedHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            drawable: Cell::new(Vec2::new(width, height)),
            pointer: Cell::new(Vec2::ZERO),
            pressed: Cell::new(false),
        }
    }

    pub fn set_drawable_size(&self, width: f32, height: f32) {
        self.drawable.set(Vec2::new(width, height));
    }

    pub fn set_pointer(&self, x: f32, y: f32) {
        self.pointer.set(Vec2::new(x, y));
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

impl HostSurface for ScriptedHost {
    fn drawable_size(&self) -> Vec2 {
        self.drawable.get()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer.get()
    }

    fn primary_pressed(&self) -> bool {
        self.pressed.get()
    }
}
