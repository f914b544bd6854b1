//! Scene drawing: turns simulation state into draw commands
//!
//! Random flicker (window lights, glitch blocks) draws from the same
//! `RandomSource` as the simulation so seeded runs render identically.

use glam::Vec2;

use super::draw::{Canvas, DrawCommand};
use crate::levels::LevelData;
use crate::sim::background::{
    FLOOR_DEPTH, building_screen_x, building_top, grid_line_origins, light_rows,
};
use crate::sim::rng::RandomSource;
use crate::sim::state::{Building, Item, ItemKind, Obstacle, ObstacleKind, Particle, Player, Viewport};
use crate::{Color, palette, rgba, with_alpha};

/// Style switches that affect motion only
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneStyle {
    /// Freeze bobbing, pulsing and flicker
    pub reduced_motion: bool,
}

pub fn draw_sky(canvas: &mut dyn Canvas, level: &LevelData) {
    canvas.draw(DrawCommand::Clear);
    canvas.draw(DrawCommand::VerticalGradient {
        top: level.sky[0],
        bottom: level.sky[1],
    });
}

pub fn draw_buildings(
    canvas: &mut dyn Canvas,
    buildings: &[Building],
    offset: f32,
    viewport: Viewport,
    level: &LevelData,
    style: SceneStyle,
    rng: &mut dyn RandomSource,
) {
    for b in buildings {
        let x = building_screen_x(b, offset, viewport);
        let top = building_top(b, viewport);
        canvas.rect(Vec2::new(x, top), Vec2::new(b.w, b.h), b.color);

        if b.lights {
            for row in light_rows(b) {
                let lit = style.reduced_motion || rng.roll_above(0.5);
                if lit {
                    canvas.rect(Vec2::new(x + 10.0, top + row), Vec2::splat(5.0), level.grid);
                }
            }
        }
    }
}

pub fn draw_grid(
    canvas: &mut dyn Canvas,
    frames: u64,
    speed: f32,
    viewport: Viewport,
    level: &LevelData,
) {
    let ground = viewport.ground_y();
    canvas.line(
        Vec2::new(0.0, ground),
        Vec2::new(viewport.width, ground),
        2.0,
        level.grid,
    );
    canvas.rect(
        Vec2::new(0.0, ground),
        Vec2::new(viewport.width, FLOOR_DEPTH),
        rgba(0x000000, 0.3),
    );
    for x in grid_line_origins(frames, speed, viewport.width) {
        canvas.line(
            Vec2::new(x + 50.0, ground),
            Vec2::new(x - 50.0, viewport.height),
            2.0,
            level.grid,
        );
    }
}

pub fn draw_player(canvas: &mut dyn Canvas, player: &Player, frames: u64, style: SceneStyle) {
    let t = frames as f32;
    let bob = if player.grounded && !style.reduced_motion {
        (t * 0.3).sin() * 5.0
    } else {
        0.0
    };
    let origin = player.pos + Vec2::new(0.0, bob);
    let mut rect = |x: f32, y: f32, w: f32, h: f32, color: Color| {
        canvas.rect(origin + Vec2::new(x, y), Vec2::new(w, h), color);
    };

    rect(-20.0, 10.0, 20.0, 60.0, palette::TRAIL);
    rect(0.0, 0.0, player.size.x, player.size.y, palette::BLACK);
    rect(5.0, 20.0, 5.0, 40.0, palette::NEON_PINK);
    rect(30.0, 20.0, 5.0, 40.0, palette::NEON_PINK);
    rect(5.0, -15.0, 30.0, 30.0, palette::SKIN);
    rect(0.0, -20.0, 40.0, 15.0, palette::HAIR);
    rect(-10.0, -15.0, 15.0, 40.0, palette::HAIR);
    rect(10.0, -10.0, 25.0, 8.0, palette::NEON_CYAN);

    if player.shield {
        let pulse = if style.reduced_motion {
            1.0
        } else {
            0.5 + (t * 0.2).sin() * 0.5
        };
        canvas.draw(DrawCommand::Ring {
            center: origin + Vec2::new(20.0, 40.0),
            radius: 60.0,
            width: 3.0,
            color: with_alpha(palette::NEON_CYAN, pulse),
        });
    }
}

/// Hover car silhouette relative to its top-left corner
const CAR_OUTLINE: [(f32, f32); 6] = [
    (0.0, 20.0),
    (20.0, 0.0),
    (80.0, 0.0),
    (100.0, 20.0),
    (90.0, 40.0),
    (10.0, 40.0),
];

pub fn draw_obstacle(
    canvas: &mut dyn Canvas,
    obstacle: &Obstacle,
    style: SceneStyle,
    rng: &mut dyn RandomSource,
) {
    let pos = obstacle.pos;
    match obstacle.kind {
        ObstacleKind::Drone => {
            canvas.rect(pos, obstacle.size, obstacle.color);
            canvas.rect(pos + Vec2::new(15.0, 5.0), Vec2::splat(20.0), palette::BLACK);
        }
        ObstacleKind::GlitchBlock => {
            let glitch = !style.reduced_motion && rng.roll_above(0.8);
            let color = if glitch { palette::NEON_PINK } else { obstacle.color };
            canvas.rect(pos, obstacle.size, color);
        }
        ObstacleKind::HoverCar => {
            let points = CAR_OUTLINE
                .iter()
                .map(|&(x, y)| pos + Vec2::new(x, y))
                .collect();
            canvas.draw(DrawCommand::Polygon {
                points,
                color: obstacle.color,
            });
            canvas.rect(pos + Vec2::new(10.0, 40.0), Vec2::new(80.0, 5.0), palette::NEON_CYAN);
        }
    }
}

pub fn draw_item(canvas: &mut dyn Canvas, item: &Item) {
    let center = item.center();
    match item.kind {
        ItemKind::Coin => {
            canvas.draw(DrawCommand::RotatedSquare {
                center,
                half: 10.0,
                angle: item.angle,
                color: palette::GOLD,
            });
            canvas.draw(DrawCommand::Glyph {
                center,
                angle: item.angle,
                glyph: '₿',
                size: 16.0,
                color: palette::BLACK,
            });
        }
        ItemKind::Shield => {
            canvas.draw(DrawCommand::Ring {
                center,
                radius: 15.0,
                width: 3.0,
                color: palette::NEON_CYAN,
            });
            canvas.draw(DrawCommand::Glyph {
                center,
                angle: item.angle,
                glyph: 'S',
                size: 12.0,
                color: palette::WHITE,
            });
        }
    }
}

/// Live particles fade with their remaining life
pub fn draw_particle(canvas: &mut dyn Canvas, particle: &Particle) {
    if particle.life > 0.0 {
        canvas.circle(
            particle.pos,
            particle.size,
            with_alpha(particle.color, particle.life),
        );
    }
}
