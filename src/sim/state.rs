//! Simulation state types
//!
//! Everything a run mutates lives in these plain structs; `Simulation`
//! owns one of each and hands out `&mut` borrows per step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Color, palette};

/// Screen status owned by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostStatus {
    /// Title menu
    Start,
    /// Active gameplay
    Playing,
    /// Run ended on a fatal collision
    GameOver,
    /// Run reached the level's target distance
    LevelComplete,
}

/// Discrete events produced during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    CoinCollected,
    ShieldCollected,
    ShieldBroken,
    /// Fatal collision; emitted once per run
    GameOver,
    /// Target distance reached; emitted once per run
    LevelComplete,
}

/// Pixel dimensions of the drawable surface for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_OFFSET
    }
}

/// Per-run counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// True between `start_run` and the first terminal event
    pub active: bool,
    /// 1-based level number
    pub level: u32,
    /// Distance covered (never decreases)
    pub score: f64,
    pub coins: u32,
    /// Scroll speed in pixels per frame
    pub speed: f32,
    /// Frames advanced while active
    pub frames: u64,
    /// Building parallax offset
    pub bg_offset: f32,
}

impl RunState {
    pub fn new(level: u32, speed: f32) -> Self {
        Self {
            active: true,
            level,
            score: 0.0,
            coins: 0,
            speed,
            frames: 0,
            bg_offset: 0.0,
        }
    }

    /// Percentage of `dist` covered, capped at 100
    pub fn progress(&self, dist: f64) -> f32 {
        progress(self.score, dist)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            active: false,
            ..Self::new(1, 0.0)
        }
    }
}

/// `min(100, score / dist * 100)`
pub fn progress(score: f64, dist: f64) -> f32 {
    if dist <= 0.0 {
        return 100.0;
    }
    (score / dist * 100.0).min(100.0) as f32
}

/// The runner. Only `pos.y` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub dy: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub grounded: bool,
    pub shield: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, 0.0),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dy: 0.0,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            grounded: false,
            shield: false,
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Airborne, bobs up and down
    Drone,
    /// Ground block that flickers
    GlitchBlock,
    /// Wide ground vehicle
    HoverCar,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Drone,
        ObstacleKind::GlitchBlock,
        ObstacleKind::HoverCar,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Pending removal at the end of the frame
    pub marked: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Coin,
    Shield,
}

/// Collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Spin angle in radians
    pub angle: f32,
    pub marked: bool,
}

impl Item {
    pub const SIZE: f32 = 30.0;

    pub fn new(kind: ItemKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::splat(Self::SIZE),
            angle: 0.0,
            marked: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Explosion,
    Dust,
    Spark,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub kind: ParticleKind,
    pub size: f32,
    /// 0-1, decreases over time
    pub life: f32,
}

/// Background building silhouette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
    pub lights: bool,
}

impl Building {
    pub fn dark(x: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            w,
            h,
            color: palette::BUILDING_DARK,
            lights: false,
        }
    }
}

/// Values pushed to the HUD once per running frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Distance covered, floored
    pub score: u32,
    pub coins: u32,
    /// 0..=100
    pub progress: f32,
    /// Active power-up banner
    pub message: Option<&'static str>,
}
