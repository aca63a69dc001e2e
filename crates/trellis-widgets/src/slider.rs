// crates/trellis-widgets/src/slider.rs

use std::rc::Rc;

use glam::Vec2;
use trellis_core::{Behavior, Element};

/// Callback run by a slider. `Some(value)` carries the pointer's distance
/// along the slider axis in host units; `None` marks the end-of-update call
/// that fires regardless of pointer state.
pub type SliderCallback = Rc<dyn Fn(&mut Element, Option<f32>)>;

/// Configuration for [`slider`].
pub struct SliderConfig {
    /// Anchor the axis rotates around.
    pub position: Vec2,
    /// `size.y` is the grab band: pointer offsets within `size.y` of the axis
    /// on either side count as on the slider.
    pub size: Vec2,
    /// Axis rotation in radians; 0 points along positive x.
    pub angle: f32,
    pub on_change: SliderCallback,
}

/// Builds a radial slider.
///
/// Each update the pointer offset from the anchor is rotated into the
/// slider's frame. While the primary button is held with the pointer inside
/// the grab band, `on_change` receives `Some(along)`: the signed, unclamped
/// distance along the axis. Every update then ends with one
/// `on_change(element, None)` call, held or not.
pub fn slider(config: SliderConfig) -> Element {
    let SliderConfig {
        position,
        size,
        angle,
        on_change,
    } = config;

    let (sin, cos) = angle.sin_cos();

    Element {
        position,
        size,
        behavior: Behavior::new(move |element, host, _dt| {
            let delta = host.pointer_position() - element.position;
            let along = delta.x * cos + delta.y * sin;
            let off = delta.y * cos - delta.x * sin;
            if off.abs() <= element.size.y && host.primary_pressed() {
                on_change(element, Some(along));
            }
            on_change(element, None);
        }),
        ..Element::default()
    }
}
