// crates/trellis-layout/src/padding.rs

use glam::Vec2;
use trellis_core::{Element, PartBehavior};

/// Wraps `parts` in an element whose size is the padding amounts themselves.
///
/// The layout pass assigns every part the position `(x_amount, y_amount)`.
/// This is an absolute assignment, not an offset from where the part was, so
/// all parts land on the same point.
pub fn padding(parts: Vec<Element>, x_amount: f32, y_amount: f32) -> Element {
    Element {
        size: Vec2::new(x_amount, y_amount),
        parts,
        part_behavior: PartBehavior::new(|parent, index| {
            let mut part = parent.parts[index].clone();
            part.position = parent.size;
            part
        }),
        ..Element::default()
    }
}
