// crates/trellis-widgets/src/button.rs

use std::rc::Rc;

use glam::Vec2;
use tracing::trace;
use trellis_core::{in_box, Behavior, Element};

/// Callback run while a button is held: receives the button element and the
/// frame delta in seconds.
pub type ButtonCallback = Rc<dyn Fn(&mut Element, f32)>;

/// Configuration for [`button`].
pub struct ButtonConfig {
    pub position: Vec2,
    pub size: Vec2,
    pub on_press: ButtonCallback,
}

/// Builds an element that polls the pointer each update and runs `on_press`
/// whenever the primary button is held with the pointer inside the element's
/// box (edges inclusive). It fires on every update while held, not once per
/// click.
pub fn button(config: ButtonConfig) -> Element {
    let ButtonConfig {
        position,
        size,
        on_press,
    } = config;

    Element {
        position,
        size,
        behavior: Behavior::new(move |element, host, dt| {
            let pointer = host.pointer_position();
            if host.primary_pressed() && in_box(pointer, element.position, element.size) {
                trace!("button hit at {:?}", pointer);
                on_press(element, dt);
            }
        }),
        ..Element::default()
    }
}
