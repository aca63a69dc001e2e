// crates/trellis-layout/src/field.rs

use glam::Vec2;
use tracing::debug;
use trellis_core::{Align, Behavior, Element, HostSurface, PartBehavior};

/// Configuration for [`field`].
///
/// Defaults: no alignment on either axis, `snap` and `retrigger` on, size
/// taken from the host's drawable size at construction.
#[derive(Debug)]
pub struct FieldConfig {
    pub position: Vec2,
    /// Fixed width; defaults to the host's current drawable width.
    pub width: Option<f32>,
    /// Fixed height; defaults to the host's current drawable height.
    pub height: Option<f32>,
    /// Horizontal placement of every part within the field's box.
    pub align_x: Align,
    /// Vertical placement of every part within the field's box.
    pub align_y: Align,
    /// Track the host's drawable size on every update.
    pub snap: bool,
    /// Re-run the layout pass immediately after a snap.
    pub retrigger: bool,
    pub parts: Vec<Element>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            width: None,
            height: None,
            align_x: Align::None,
            align_y: Align::None,
            snap: true,
            retrigger: true,
            parts: Vec::new(),
        }
    }
}

/// Builds a viewport container that can follow the host's drawable size.
///
/// With `snap` on, each update compares the drawable size against the
/// element's stored size and adopts any change; with `retrigger` also on,
/// the change is followed by exactly one `apply_part_behavior` call on the
/// field so parts re-align against the new box. This is the only built-in
/// behavior that mutates geometry from inside `update`.
pub fn field(config: FieldConfig, host: &dyn HostSurface) -> Element {
    let FieldConfig {
        position,
        width,
        height,
        align_x,
        align_y,
        snap,
        retrigger,
        parts,
    } = config;

    let drawable = host.drawable_size();
    let size = Vec2::new(width.unwrap_or(drawable.x), height.unwrap_or(drawable.y));

    let behavior = if snap {
        Behavior::new(move |element, host, _dt| {
            let drawable = host.drawable_size();
            if drawable != element.size {
                debug!("field snapping {:?} -> {:?}", element.size, drawable);
                element.size = drawable;
                if retrigger {
                    element.apply_part_behavior();
                }
            }
        })
    } else {
        Behavior::none()
    };

    Element {
        position,
        size,
        behavior,
        parts,
        part_behavior: PartBehavior::new(move |parent, index| {
            let mut part = parent.parts[index].clone();
            part.align_x(parent.position.x, parent.position.x + parent.size.x, align_x);
            part.align_y(parent.position.y, parent.position.y + parent.size.y, align_y);
            part
        }),
        ..Element::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use trellis_core::ScriptedHost;

    fn sized(width: f32, height: f32) -> Element {
        Element {
            size: Vec2::new(width, height),
            ..Element::default()
        }
    }

    /// A part whose own layout pass bumps a counter, for observing how many
    /// relayouts reach the subtree.
    fn counting_part(counter: &Rc<Cell<u32>>) -> Element {
        let counter = counter.clone();
        Element {
            parts: vec![Element::default()],
            part_behavior: PartBehavior::new(move |parent, index| {
                counter.set(counter.get() + 1);
                parent.parts[index].clone()
            }),
            ..Element::default()
        }
    }

    #[test]
    fn test_field_takes_drawable_size_by_default() {
        let host = ScriptedHost::new(800.0, 600.0);
        let built = field(FieldConfig::default(), &host);
        assert_eq!(built.size, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_field_partial_size_override() {
        let host = ScriptedHost::new(800.0, 600.0);
        let built = field(
            FieldConfig {
                width: Some(320.0),
                ..FieldConfig::default()
            },
            &host,
        );
        assert_eq!(built.size, Vec2::new(320.0, 600.0));
    }

    #[test]
    fn test_field_centers_parts_on_both_axes() {
        let host = ScriptedHost::new(100.0, 100.0);
        let mut built = field(
            FieldConfig {
                align_x: Align::Center,
                align_y: Align::End,
                parts: vec![sized(20.0, 10.0)],
                ..FieldConfig::default()
            },
            &host,
        );
        built.apply_part_behavior();
        assert_eq!(built.parts[0].position, Vec2::new(40.0, 90.0));
    }

    #[test]
    fn test_snap_adopts_new_drawable_size_once_per_update() {
        let host = ScriptedHost::new(100.0, 100.0);
        let relayouts = Rc::new(Cell::new(0));
        let mut built = field(
            FieldConfig {
                parts: vec![counting_part(&relayouts)],
                ..FieldConfig::default()
            },
            &host,
        );

        host.set_drawable_size(200.0, 150.0);
        built.update(&host, 0.016);
        assert_eq!(built.size, Vec2::new(200.0, 150.0));
        assert_eq!(relayouts.get(), 1);

        // Stable size: no further relayout.
        built.update(&host, 0.016);
        assert_eq!(relayouts.get(), 1);
    }

    #[test]
    fn test_snap_without_retrigger_keeps_layout() {
        let host = ScriptedHost::new(100.0, 100.0);
        let relayouts = Rc::new(Cell::new(0));
        let mut built = field(
            FieldConfig {
                retrigger: false,
                parts: vec![counting_part(&relayouts)],
                ..FieldConfig::default()
            },
            &host,
        );

        host.set_drawable_size(50.0, 50.0);
        built.update(&host, 0.016);
        assert_eq!(built.size, Vec2::new(50.0, 50.0));
        assert_eq!(relayouts.get(), 0);
    }

    #[test]
    fn test_no_snap_ignores_drawable_changes() {
        let host = ScriptedHost::new(100.0, 100.0);
        let mut built = field(
            FieldConfig {
                snap: false,
                ..FieldConfig::default()
            },
            &host,
        );

        host.set_drawable_size(640.0, 480.0);
        built.update(&host, 0.016);
        assert_eq!(built.size, Vec2::new(100.0, 100.0));
    }
}
