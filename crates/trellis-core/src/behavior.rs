// crates/trellis-core/src/behavior.rs

use std::fmt;
use std::rc::Rc;

use crate::canvas::Canvas;
use crate::element::Element;
use crate::host::HostSurface;

/// Per-frame update function attached to an element.
///
/// Runs with mutable access to its element, the polled host and the frame
/// delta in seconds. The default is a no-op. Handles are cheap to clone and
/// share their closure, which is how copied elements keep identical behavior.
#[derive(Clone, Default)]
pub struct Behavior(Option<Rc<dyn Fn(&mut Element, &dyn HostSurface, f32)>>);

impl Behavior {
    pub fn new(f: impl Fn(&mut Element, &dyn HostSurface, f32) + 'static) -> Self {
        Self(Some(Rc::new(f)))
    }

    /// The no-op behavior; same as `Behavior::default()`.
    pub fn none() -> Self {
        Self(None)
    }

    /// Whether a closure is attached.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn run(&self, element: &mut Element, host: &dyn HostSurface, dt: f32) {
        if let Some(f) = &self.0 {
            f(element, host, dt);
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0.is_some() {
            "Behavior(..)"
        } else {
            "Behavior(none)"
        })
    }
}

/// Transform producing the replacement for one part during a layout pass.
///
/// Receives the parent and a part index and returns the new part value; the
/// parent's `parts` mid-pass mix already-replaced entries (before `index`)
/// with original ones (after `index`). The default transform is the identity:
/// a copy of the current part.
#[derive(Clone, Default)]
pub struct PartBehavior(Option<Rc<dyn Fn(&Element, usize) -> Element>>);

impl PartBehavior {
    pub fn new(f: impl Fn(&Element, usize) -> Element + 'static) -> Self {
        Self(Some(Rc::new(f)))
    }

    /// The identity transform; same as `PartBehavior::default()`.
    pub fn identity() -> Self {
        Self(None)
    }

    /// Whether a transform is attached.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn produce(&self, parent: &Element, index: usize) -> Element {
        match &self.0 {
            Some(f) => f(parent, index),
            None => parent.parts[index].clone(),
        }
    }
}

impl fmt::Debug for PartBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0.is_some() {
            "PartBehavior(..)"
        } else {
            "PartBehavior(identity)"
        })
    }
}

/// Draw callback run by a node's parent during the render traversal.
#[derive(Clone, Default)]
pub struct RenderBehavior(Option<Rc<dyn Fn(&Element, &mut dyn Canvas)>>);

impl RenderBehavior {
    pub fn new(f: impl Fn(&Element, &mut dyn Canvas) + 'static) -> Self {
        Self(Some(Rc::new(f)))
    }

    /// Draws nothing; same as `RenderBehavior::default()`.
    pub fn none() -> Self {
        Self(None)
    }

    /// Whether a closure is attached.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn run(&self, element: &Element, canvas: &mut dyn Canvas) {
        if let Some(f) = &self.0 {
            f(element, canvas);
        }
    }
}

impl fmt::Debug for RenderBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0.is_some() {
            "RenderBehavior(..)"
        } else {
            "RenderBehavior(none)"
        })
    }
}
