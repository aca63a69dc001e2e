// crates/trellis-layout/src/column.rs

use glam::Vec2;
use tracing::trace;
use trellis_core::{Align, Element, PartBehavior};

/// Configuration for [`column`].
#[derive(Debug, Default)]
pub struct ColumnConfig {
    /// Top-left corner of the column.
    pub position: Vec2,
    /// Vertical gap budget, charged once per part including the first.
    pub spacing: f32,
    /// Horizontal placement of each part within the column's box.
    pub align: Align,
    /// Column width; defaults to the widest part.
    pub width: Option<f32>,
    pub parts: Vec<Element>,
}

/// Builds a vertical stacking container; the y-axis mirror of [`crate::row`].
///
/// The column's height is `parts.len() * spacing` plus the sum of part
/// heights, spacing charged per part. Each layout pass assigns part `i` the y
/// coordinate `i * spacing + sum(height of parts[0..i])` and aligns its x
/// within the column's box.
pub fn column(config: ColumnConfig) -> Element {
    let ColumnConfig {
        position,
        spacing,
        align,
        width,
        parts,
    } = config;

    let height = parts.len() as f32 * spacing + parts.iter().map(|p| p.size.y).sum::<f32>();
    let width = width.unwrap_or_else(|| parts.iter().map(|p| p.size.x).fold(0.0, f32::max));

    Element {
        position,
        size: Vec2::new(width, height),
        parts,
        part_behavior: PartBehavior::new(move |parent, index| {
            let mut part = parent.parts[index].clone();
            let occupied: f32 = parent.parts[..index].iter().map(|p| p.size.y).sum();
            part.position.y = index as f32 * spacing + occupied;
            part.align_x(parent.position.x, parent.position.x + parent.size.x, align);
            trace!("column part {} -> y={}", index, part.position.y);
            part
        }),
        ..Element::default()
    }
}
