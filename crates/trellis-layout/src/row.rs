// crates/trellis-layout/src/row.rs

use glam::Vec2;
use tracing::trace;
use trellis_core::{Align, Element, PartBehavior};

/// Configuration for [`row`].
#[derive(Debug, Default)]
pub struct RowConfig {
    /// Top-left corner of the row.
    pub position: Vec2,
    /// Horizontal gap budget, charged once per part including the first.
    pub spacing: f32,
    /// Vertical placement of each part within the row's box.
    pub align: Align,
    /// Row height; defaults to the tallest part.
    pub height: Option<f32>,
    pub parts: Vec<Element>,
}

/// Builds a horizontal stacking container.
///
/// The row's width is `parts.len() * spacing` plus the sum of part widths:
/// spacing is charged per part, not per gap, so even a single-part row is
/// `spacing` wider than its part. Each layout pass assigns part `i` the x
/// coordinate `i * spacing + sum(width of parts[0..i])`, a prefix sum over
/// the current part sequence, and aligns its y within the row's box. The
/// row's own position shifts its parts' y range but not their x.
pub fn row(config: RowConfig) -> Element {
    let RowConfig {
        position,
        spacing,
        align,
        height,
        parts,
    } = config;

    let width = parts.len() as f32 * spacing + parts.iter().map(|p| p.size.x).sum::<f32>();
    let height = height.unwrap_or_else(|| parts.iter().map(|p| p.size.y).fold(0.0, f32::max));

    Element {
        position,
        size: Vec2::new(width, height),
        parts,
        part_behavior: PartBehavior::new(move |parent, index| {
            let mut part = parent.parts[index].clone();
            let occupied: f32 = parent.parts[..index].iter().map(|p| p.size.x).sum();
            part.position.x = index as f32 * spacing + occupied;
            part.align_y(parent.position.y, parent.position.y + parent.size.y, align);
            trace!("row part {} -> x={}", index, part.position.x);
            part
        }),
        ..Element::default()
    }
}
