// crates/trellis-render/src/lib.rs

//! Command-based rendering for the trellis element tree: render behaviors
//! draw into a [`DrawList`] through the core [`Canvas`] trait, and a
//! [`RenderBackend`] executes the recorded commands once per frame.

use glam::{Vec2, Vec4};
use trellis_core::{Canvas, RectStyle};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Backend initialization failed: {0}")]
    InitializationFailed(String),
    #[error("Present failed: {0}")]
    PresentFailed(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// One recorded drawing operation; variants mirror the [`Canvas`] methods.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        origin: Vec2,
        size: Vec2,
        style: RectStyle,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Vec4,
    },
    Text {
        origin: Vec2,
        text: String,
        font_size: f32,
        color: Vec4,
    },
}

/// Canvas that records commands for a backend to execute later.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn rect(&mut self, origin: Vec2, size: Vec2, style: RectStyle) {
        self.commands.push(DrawCommand::Rect { origin, size, style });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, origin: Vec2, text: &str, font_size: f32, color: Vec4) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font_size,
            color,
        });
    }
}

/// Backend executing recorded draw commands, one frame at a time.
pub trait RenderBackend {
    fn begin_frame(&mut self, clear_color: Vec4) -> RenderResult<()>;
    fn execute(&mut self, commands: &[DrawCommand]) -> RenderResult<()>;
    fn end_frame(&mut self) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_call_order() {
        let mut list = DrawList::new();
        list.rect(Vec2::ZERO, Vec2::new(10.0, 10.0), RectStyle::default());
        list.text(Vec2::new(1.0, 2.0), "hi", 12.0, Vec4::ONE);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(
            &list.commands()[1],
            DrawCommand::Text { text, .. } if text == "hi"
        ));
    }

    #[test]
    fn test_draw_list_clear() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::ONE, 1.0, Vec4::ONE);
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }
}
