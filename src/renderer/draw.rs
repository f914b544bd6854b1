//! Drawable surface abstraction
//!
//! The simulation draws through `Canvas`, a retained list of primitives in
//! surface pixel coordinates (origin top-left, y down). Hosts either replay
//! the commands onto their own 2D API or tessellate them for the GPU.

use glam::Vec2;

use crate::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear,
    /// Full-surface vertical gradient
    VerticalGradient { top: Color, bottom: Color },
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Square rotated around its center
    RotatedSquare {
        center: Vec2,
        half: f32,
        angle: f32,
        color: Color,
    },
    Circle { center: Vec2, radius: f32, color: Color },
    /// Stroked circle outline
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Convex filled polygon
    Polygon { points: Vec<Vec2>, color: Color },
    /// Single glyph centered on `center`, rotated by `angle`
    Glyph {
        center: Vec2,
        angle: f32,
        glyph: char,
        size: f32,
        color: Color,
    },
}

/// A surface the simulation can draw one frame onto
pub trait Canvas {
    /// Pixel size, or `None` when the surface is not available yet
    fn size(&self) -> Option<(u32, u32)>;

    fn draw(&mut self, command: DrawCommand);

    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.draw(DrawCommand::Rect { pos, size, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.draw(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Records commands for one frame; `Clear` discards everything before it
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// React to a host resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn size(&self) -> Option<(u32, u32)> {
        (self.width > 0 && self.height > 0).then_some((self.width, self.height))
    }

    fn draw(&mut self, command: DrawCommand) {
        if command == DrawCommand::Clear {
            self.commands.clear();
        }
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        assert_eq!(DrawList::new(0, 600).size(), None);
        assert_eq!(DrawList::new(800, 600).size(), Some((800, 600)));
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let mut list = DrawList::new(10, 10);
        list.rect(Vec2::ZERO, Vec2::ONE, palette::WHITE);
        list.circle(Vec2::ZERO, 1.0, palette::WHITE);
        assert_eq!(list.len(), 2);
        list.draw(DrawCommand::Clear);
        assert_eq!(list.commands, vec![DrawCommand::Clear]);
    }
}
