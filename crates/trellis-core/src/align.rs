// crates/trellis-core/src/align.rs

/// Placement of a box within a span, shared by both axes: `Start` reads as
/// left/top, `End` as right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Leave the coordinate untouched.
    #[default]
    None,
    Start,
    Center,
    End,
}

/// Start coordinate for a box of length `extent` aligned in `[min, max]`.
///
/// `Align::None` returns `current` unchanged. The span may be smaller than
/// `extent`; nothing is clamped.
pub fn align_span(current: f32, min: f32, max: f32, extent: f32, align: Align) -> f32 {
    match align {
        Align::None => current,
        Align::Start => min,
        Align::Center => min + (max - min - extent) / 2.0,
        Align::End => max - extent,
    }
}
