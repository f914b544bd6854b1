//! Tessellation of draw commands into colored triangles

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::DrawCommand;
use super::vertex::Vertex;
use crate::Color;

/// Circle segments for particles and rings
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Two triangles covering a quad given in winding order
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, colors: [Color; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, colors[0]),
        Vertex::new(b.x, b.y, colors[1]),
        Vertex::new(c.x, c.y, colors[2]),
        Vertex::new(a.x, a.y, colors[0]),
        Vertex::new(c.x, c.y, colors[2]),
        Vertex::new(d.x, d.y, colors[3]),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let max = pos + size;
    quad(
        pos,
        Vec2::new(max.x, pos.y),
        max,
        Vec2::new(pos.x, max.y),
        [color; 4],
    )
    .to_vec()
}

/// Square rotated around its center
pub fn rotated_square(center: Vec2, half: f32, angle: f32, color: Color) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let corner = |x: f32, y: f32| center + rot.rotate(Vec2::new(x, y) * half);
    quad(
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
        [color; 4],
    )
    .to_vec()
}

/// Gradient quad covering the whole surface
pub fn vertical_gradient(width: f32, height: f32, top: Color, bottom: Color) -> Vec<Vertex> {
    quad(
        Vec2::ZERO,
        Vec2::new(width, 0.0),
        Vec2::new(width, height),
        Vec2::new(0.0, height),
        [top, top, bottom, bottom],
    )
    .to_vec()
}

/// Thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(from + perp, to + perp, to - perp, from - perp, [color; 4]).to_vec()
}

/// Triangle fan over a convex polygon
pub fn polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let first = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let point = |r: f32, theta: f32| center + Vec2::from_angle(theta) * r;

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.extend(quad(
            point(inner_radius, theta1),
            point(outer_radius, theta1),
            point(outer_radius, theta2),
            point(inner_radius, theta2),
            [color; 4],
        ));
    }

    vertices
}

/// Tessellate a frame's commands for a surface of the given size.
///
/// Glyphs are left to the host's text renderer.
pub fn tessellate(commands: &[DrawCommand], width: f32, height: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Clear => vertices.clear(),
            DrawCommand::VerticalGradient { top, bottom } => {
                vertices.extend(vertical_gradient(width, height, *top, *bottom));
            }
            DrawCommand::Rect { pos, size, color } => vertices.extend(rect(*pos, *size, *color)),
            DrawCommand::RotatedSquare {
                center,
                half,
                angle,
                color,
            } => vertices.extend(rotated_square(*center, *half, *angle, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Ring {
                center,
                radius,
                width,
                color,
            } => vertices.extend(ring(
                *center,
                radius - width / 2.0,
                radius + width / 2.0,
                *color,
                CIRCLE_SEGMENTS * 2,
            )),
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => vertices.extend(line(*from, *to, *width, *color)),
            DrawCommand::Polygon { points, color } => vertices.extend(polygon(points, *color)),
            DrawCommand::Glyph { .. } => {}
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), palette::WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[2].position, [4.0, 6.0]);
    }

    #[test]
    fn test_rotated_square_keeps_extent() {
        let v = rotated_square(Vec2::ZERO, 10.0, PI / 4.0, palette::GOLD);
        let r = 10.0 * 2.0f32.sqrt();
        for vert in &v {
            let len = Vec2::from(vert.position).length();
            assert!((len - r).abs() < 1e-3);
        }
    }

    #[test]
    fn test_polygon_fan() {
        let pts = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y, Vec2::new(-1.0, 0.5)];
        assert_eq!(polygon(&pts, palette::WHITE).len(), 9);
        assert!(polygon(&pts[..2], palette::WHITE).is_empty());
    }

    #[test]
    fn test_line_width() {
        let v = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, palette::WHITE);
        assert_eq!(v[0].position, [0.0, 1.0]);
        assert_eq!(v[5].position, [0.0, -1.0]);
    }

    #[test]
    fn test_tessellate_skips_glyphs_and_honors_clear() {
        let commands = vec![
            DrawCommand::Rect {
                pos: Vec2::ZERO,
                size: Vec2::ONE,
                color: palette::WHITE,
            },
            DrawCommand::Clear,
            DrawCommand::Circle {
                center: Vec2::ZERO,
                radius: 2.0,
                color: palette::GOLD,
            },
            DrawCommand::Glyph {
                center: Vec2::ZERO,
                angle: 0.0,
                glyph: 'S',
                size: 12.0,
                color: palette::WHITE,
            },
        ];
        let v = tessellate(&commands, 100.0, 100.0);
        assert_eq!(v.len(), (CIRCLE_SEGMENTS * 3) as usize);
    }
}
