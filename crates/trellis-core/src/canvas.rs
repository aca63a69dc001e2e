// crates/trellis-core/src/canvas.rs

use glam::{Vec2, Vec4};

/// Rectangle paint: fill plus optional stroke, RGBA components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub fill: Vec4,
    pub stroke: Vec4,
    pub stroke_width: f32,
    pub corner_radius: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Vec4::ZERO,
            stroke: Vec4::ZERO,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }
}

impl RectStyle {
    pub fn filled(fill: Vec4) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }

    pub fn stroked(stroke: Vec4, stroke_width: f32) -> Self {
        Self {
            stroke,
            stroke_width,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

/// Drawing surface handed to render behaviors during the render traversal.
///
/// The tree never draws on its own; it only forwards the canvas to each
/// part's render behavior in traversal order.
pub trait Canvas {
    fn rect(&mut self, origin: Vec2, size: Vec2, style: RectStyle);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4);
    fn text(&mut self, origin: Vec2, text: &str, font_size: f32, color: Vec4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_style_constructors() {
        let fill = RectStyle::filled(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(fill.fill, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(fill.stroke_width, 0.0);

        let stroked = RectStyle::stroked(Vec4::ONE, 2.0).with_corner_radius(4.0);
        assert_eq!(stroked.fill, Vec4::ZERO);
        assert_eq!(stroked.stroke_width, 2.0);
        assert_eq!(stroked.corner_radius, 4.0);
    }
}
