// crates/trellis-runtime/src/lib.rs

//! Frame driver for a trellis element tree: owns the root element, the
//! polled host surface and a render backend, and exposes the one-`update`,
//! one-`render` per frame loop the host is expected to drive.

use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::Vec4;
use tracing::debug;
use trellis_core::{Element, HostSurface};
use trellis_render::{DrawList, RenderBackend};

pub mod backends;
pub use backends::*;

pub struct App<B: RenderBackend> {
    root: Element,
    host: Rc<dyn HostSurface>,
    backend: B,
    draw_list: DrawList,
    clear_color: Vec4,
    frame_count: u64,
    last_frame_time: Instant,
}

impl<B: RenderBackend> App<B> {
    /// Builds the app and runs the initial layout pass on `root`.
    pub fn new(root: Element, host: Rc<dyn HostSurface>, backend: B) -> Self {
        let mut app = Self {
            root,
            host,
            backend,
            draw_list: DrawList::new(),
            clear_color: Vec4::new(0.1, 0.1, 0.1, 1.0),
            frame_count: 0,
            last_frame_time: Instant::now(),
        };
        app.relayout();
        app
    }

    pub fn with_clear_color(mut self, clear_color: Vec4) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Per-frame update traversal, own-behavior-first from the root down.
    pub fn update(&mut self, delta: Duration) {
        self.root.update(self.host.as_ref(), delta.as_secs_f32());
    }

    /// Renders one frame: the root's own render behavior (the tree never
    /// runs it), then the render traversal, then one backend pass over the
    /// recorded commands.
    pub fn render(&mut self) -> anyhow::Result<()> {
        self.draw_list.clear();
        self.root.render_behavior.run(&self.root, &mut self.draw_list);
        self.root.render(&mut self.draw_list);

        self.backend.begin_frame(self.clear_color)?;
        self.backend.execute(self.draw_list.commands())?;
        self.backend.end_frame()?;

        self.frame_count += 1;
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        if self.frame_count % 60 == 0 {
            debug!("FPS: {:.1}", 1.0 / frame_time.as_secs_f32());
        }

        Ok(())
    }

    /// Explicit whole-tree relayout, for owners that changed the part set.
    pub fn relayout(&mut self) {
        self.root.apply_part_behavior();
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Commands recorded by the most recent [`App::render`] call.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use trellis_core::{PartBehavior, RenderBehavior, ScriptedHost};

    #[test]
    fn test_new_runs_initial_layout() {
        let host = Rc::new(ScriptedHost::new(100.0, 100.0));
        let root = Element {
            parts: vec![Element::default()],
            part_behavior: PartBehavior::new(|parent, index| {
                let mut part = parent.parts[index].clone();
                part.position = Vec2::new(7.0, 7.0);
                part
            }),
            ..Element::default()
        };

        let app = App::new(root, host, TraceBackend::new());
        assert_eq!(app.root().parts[0].position, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_render_includes_root_render_behavior() {
        let host = Rc::new(ScriptedHost::new(100.0, 100.0));
        let root = Element {
            render_behavior: RenderBehavior::new(|element, canvas| {
                canvas.text(element.position, "root", 12.0, Vec4::ONE)
            }),
            parts: vec![Element {
                render_behavior: RenderBehavior::new(|element, canvas| {
                    canvas.text(element.position, "part", 12.0, Vec4::ONE)
                }),
                ..Element::default()
            }],
            ..Element::default()
        };

        let mut app = App::new(root, host, TraceBackend::new());
        app.render().unwrap();

        assert_eq!(app.draw_list().len(), 2);
        assert_eq!(app.frame_count(), 1);
        assert_eq!(app.backend().frames(), 1);
        assert_eq!(app.backend().commands_executed(), 2);
    }

    #[test]
    fn test_update_reaches_behaviors_through_host() {
        let host = Rc::new(ScriptedHost::new(100.0, 100.0));
        let root = Element {
            behavior: trellis_core::Behavior::new(|element, host, _| {
                element.size = host.drawable_size();
            }),
            ..Element::default()
        };

        let mut app = App::new(root, host.clone(), TraceBackend::new());
        host.set_drawable_size(320.0, 240.0);
        app.update(Duration::from_millis(16));
        assert_eq!(app.root().size, Vec2::new(320.0, 240.0));
    }
}
