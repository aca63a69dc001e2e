// crates/trellis-core/src/bounds.rs

use glam::Vec2;

/// Point-in-rectangle test, inclusive on all four edges.
///
/// A point exactly on an edge counts as inside; widget hit testing relies on
/// that.
pub fn in_box(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}
