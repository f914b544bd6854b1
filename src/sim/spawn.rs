//! Frame-cadenced obstacle and item generation
//!
//! Everything spawns at the right edge of the viewport and scrolls left.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Item, ItemKind, Obstacle, ObstacleKind, Viewport};
use crate::consts::ITEM_SPAWN_INTERVAL;
use crate::palette;

/// Frames between obstacle spawns: `floor(1000 / speed)`
pub fn obstacle_interval(speed: f32) -> u64 {
    ((1000.0 / speed).floor() as u64).max(1)
}

impl Obstacle {
    /// Build an obstacle of `kind` at the right edge of the viewport
    pub fn spawn(kind: ObstacleKind, viewport: Viewport, rng: &mut dyn RandomSource) -> Self {
        let ground = viewport.ground_y();
        let (y, size, color) = match kind {
            ObstacleKind::Drone => (
                ground - 80.0 - rng.next_f32() * 50.0,
                Vec2::new(50.0, 30.0),
                palette::DRONE_RED,
            ),
            ObstacleKind::GlitchBlock => (ground - 50.0, Vec2::new(40.0, 50.0), palette::WHITE),
            ObstacleKind::HoverCar => (ground - 60.0, Vec2::new(100.0, 40.0), palette::HOVER_ORANGE),
        };
        Self {
            kind,
            pos: Vec2::new(viewport.width, y),
            size,
            color,
            marked: false,
        }
    }

    /// Scroll left; drones also bob on a sine wave
    pub fn advance(&mut self, speed: f32, frames: u64) {
        self.pos.x -= speed;
        if self.kind == ObstacleKind::Drone {
            self.pos.y += (frames as f32 * 0.1).sin() * 2.0;
        }
    }
}

/// Item rotation per frame (radians)
pub const ITEM_SPIN: f32 = 0.1;

impl Item {
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    pub fn spin(&mut self) {
        self.angle = (self.angle + ITEM_SPIN) % std::f32::consts::TAU;
    }
}

/// Spawn an obstacle if this frame is on the cadence
pub fn maybe_spawn_obstacle(
    frames: u64,
    speed: f32,
    viewport: Viewport,
    rng: &mut dyn RandomSource,
) -> Option<Obstacle> {
    if frames % obstacle_interval(speed) != 0 {
        return None;
    }
    let kind = ObstacleKind::ALL[rng.pick(ObstacleKind::ALL.len())];
    let obstacle = Obstacle::spawn(kind, viewport, rng);
    log::debug!("frame {}: spawned {:?} at y={:.0}", frames, kind, obstacle.pos.y);
    Some(obstacle)
}

/// Every `ITEM_SPAWN_INTERVAL` frames, 60% chance of an item: 10% shields, 90% coins
pub fn maybe_spawn_item(frames: u64, viewport: Viewport, rng: &mut dyn RandomSource) -> Option<Item> {
    if frames % ITEM_SPAWN_INTERVAL != 0 || !rng.roll_above(0.4) {
        return None;
    }
    let kind = if rng.roll_above(0.9) {
        ItemKind::Shield
    } else {
        ItemKind::Coin
    };
    let y = viewport.ground_y() - (40.0 + rng.next_f32() * 80.0);
    log::debug!("frame {}: spawned {:?} at y={:.0}", frames, kind, y);
    Some(Item::new(kind, Vec2::new(viewport.width, y)))
}
