//! Cyber Princess - a side-scrolling cyberpunk endless runner
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (player physics, spawning, collisions, particles)
//! - `renderer`: Drawable surface abstraction, scene drawing and tessellation
//! - `levels`: Static level table
//! - `shell`: Host state machine (menus, retry, next level, HUD)
//! - `settings`: Player preferences

pub mod autopilot;
pub mod levels;
pub mod renderer;
pub mod settings;
pub mod shell;
pub mod sim;

pub use levels::LevelData;
pub use settings::{QualityPreset, Settings, SettingsError};
pub use shell::{GameShell, Hud};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Game configuration constants
pub mod consts {
    /// Distance from the bottom of the surface to the ground line (pixels)
    pub const GROUND_OFFSET: f32 = 100.0;
    /// Fixed horizontal position of the player
    pub const PLAYER_X: f32 = 80.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Upward impulse applied on jump (negative = up)
    pub const JUMP_FORCE: f32 = -16.0;
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.8;

    /// Distance units gained per frame per unit of scroll speed
    pub const SCORE_PER_SPEED: f64 = 0.05;
    /// Background parallax factor relative to scroll speed
    pub const PARALLAX_FACTOR: f32 = 0.1;

    /// Hitbox inset on the player's leading edge and the obstacle's top edge
    pub const HITBOX_INSET: f32 = 15.0;
    /// Pickup radius between the player's torso and an item's center
    pub const PICKUP_RADIUS: f32 = 45.0;

    /// Power-up banner lifetime in seconds
    pub const BANNER_SECS: f32 = 1.5;

    /// Frames between item spawn rolls
    pub const ITEM_SPAWN_INTERVAL: u64 = 60;
    /// Number of building silhouettes generated per run
    pub const BUILDING_COUNT: usize = 20;
}

/// Build an opaque color from a `0xRRGGBB` literal
pub const fn rgb(hex: u32) -> Color {
    rgba(hex, 1.0)
}

/// Build a color from a `0xRRGGBB` literal and an alpha
pub const fn rgba(hex: u32, alpha: f32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Shared palette
pub mod palette {
    use crate::{Color, rgb, rgba};

    pub const NEON_CYAN: Color = rgb(0x00d2d3);
    pub const NEON_PINK: Color = rgb(0xff00de);
    pub const GOLD: Color = rgb(0xffd700);
    pub const WHITE: Color = rgb(0xffffff);
    pub const BLACK: Color = rgb(0x000000);
    pub const SKIN: Color = rgb(0xffccaa);
    pub const HAIR: Color = rgb(0x6c5ce7);
    pub const TRAIL: Color = rgba(0xff00de, 0.2);
    pub const DRONE_RED: Color = rgb(0xff0000);
    pub const HOVER_ORANGE: Color = rgb(0xff9f43);
    pub const BUILDING_DARK: Color = rgb(0x111111);
    pub const BUILDING_LIGHT: Color = rgb(0x1a1a1a);
}

/// Multiply a color's alpha
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
}
