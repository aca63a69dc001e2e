// crates/trellis-core/src/element.rs

use glam::Vec2;

use crate::align::{align_span, Align};
use crate::behavior::{Behavior, PartBehavior, RenderBehavior};
use crate::canvas::Canvas;
use crate::host::HostSurface;

/// A node in the layout tree.
///
/// Geometry is absolute, in host pixels. Every field has a silent default
/// (zero geometry, no-op behaviors, no parts), so construction is
/// struct-update syntax over `Default`:
///
/// ```
/// use glam::Vec2;
/// use trellis_core::Element;
///
/// let element = Element {
///     size: Vec2::new(40.0, 12.0),
///     ..Element::default()
/// };
/// assert_eq!(element.position, Vec2::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub position: Vec2,
    pub size: Vec2,
    /// Per-frame update behavior; runs before the parts'.
    pub behavior: Behavior,
    /// Ordered parts. Index order is traversal and stacking order, and no
    /// built-in behavior reorders it.
    pub parts: Vec<Element>,
    /// Layout transform applied per part by [`Element::apply_part_behavior`].
    pub part_behavior: PartBehavior,
    /// Draw callback; run by this node's parent, never by the node itself.
    pub render_behavior: RenderBehavior,
}

impl Element {
    /// Update traversal: runs this node's behavior, then every current part
    /// in index order, depth first.
    ///
    /// The node's own behavior runs before its parts', so a behavior that
    /// grows `parts` sees the new entries updated in the same frame.
    pub fn update(&mut self, host: &dyn HostSurface, dt: f32) {
        self.update_inner(host, dt, true);
    }

    /// Runs only this node's behavior, leaving parts alone.
    pub fn update_shallow(&mut self, host: &dyn HostSurface, dt: f32) {
        self.update_inner(host, dt, false);
    }

    fn update_inner(&mut self, host: &dyn HostSurface, dt: f32, recurse: bool) {
        let behavior = self.behavior.clone();
        behavior.run(self, host, dt);
        if recurse {
            for part in &mut self.parts {
                part.update_inner(host, dt, true);
            }
        }
    }

    /// Layout pass: replaces each part with `part_behavior`'s output, in
    /// index order, then relayouts the replacement's own parts.
    ///
    /// Each replacement is written back before the next index is processed,
    /// so a transform reading `parts[j]` sees the already-replaced value for
    /// `j` before the current index and the original value after it. Row and
    /// column layout depend on this ordering for their prefix sums.
    pub fn apply_part_behavior(&mut self) {
        self.apply_part_behavior_inner(true);
    }

    /// Layout pass over direct parts only.
    pub fn apply_part_behavior_shallow(&mut self) {
        self.apply_part_behavior_inner(false);
    }

    fn apply_part_behavior_inner(&mut self, recurse: bool) {
        let part_behavior = self.part_behavior.clone();
        let mut index = 0;
        // Re-read the length every pass; the contract is "every current part".
        while index < self.parts.len() {
            let replacement = part_behavior.produce(self, index);
            self.parts[index] = replacement;
            if recurse {
                self.parts[index].apply_part_behavior_inner(true);
            }
            index += 1;
        }
    }

    /// Render traversal: each part's render behavior, then that part's
    /// subtree, in index order.
    ///
    /// A node's render behavior is run by its parent, so the root's is never
    /// reached from inside the tree; drivers invoke it themselves if the root
    /// should draw.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for part in &self.parts {
            part.render_behavior.run(part, canvas);
            part.render(canvas);
        }
    }

    /// Structurally independent copy: fresh parts storage with recursively
    /// copied parts, behavior handles shared. Same as `Clone::clone`.
    pub fn copy(&self) -> Element {
        self.clone()
    }

    /// Aligns the x coordinate within `[min, max]`; `Align::None` leaves it
    /// untouched.
    pub fn align_x(&mut self, min: f32, max: f32, align: Align) {
        self.position.x = align_span(self.position.x, min, max, self.size.x, align);
    }

    /// Aligns the y coordinate within `[min, max]`; `Align::None` leaves it
    /// untouched.
    pub fn align_y(&mut self, min: f32, max: f32, align: Align) {
        self.position.y = align_span(self.position.y, min, max, self.size.y, align);
    }
}
