//! Static level table
//!
//! Levels are 1-based. Entry 0 is a tutorial placeholder that normal play
//! never reaches: lookups clamp into `1..=MAX_LEVEL`.

use crate::{Color, rgb};

/// Parameters for a single level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelData {
    pub name: &'static str,
    /// Distance needed to clear the level
    pub dist: f64,
    /// Scroll speed in pixels per frame
    pub speed: f32,
    /// Sky gradient, top then bottom
    pub sky: [Color; 2],
    /// Neon grid and window-light color
    pub grid: Color,
}

const fn level(name: &'static str, dist: f64, speed: f32, sky: [u32; 2], grid: u32) -> LevelData {
    LevelData {
        name,
        dist,
        speed,
        sky: [rgb(sky[0]), rgb(sky[1])],
        grid: rgb(grid),
    }
}

pub const LEVELS: [LevelData; 11] = [
    level("TUTORIAL", 500.0, 5.0, [0x000000, 0x1a1a1a], 0x444444),
    level("NEO TOKYO", 1000.0, 6.0, [0x020024, 0x090979], 0xff00de),
    level("DATA HIGHWAY", 1500.0, 7.0, [0x000000, 0x434343], 0x00d2d3),
    level("CYBER SLUMS", 2000.0, 7.5, [0x1a2a6c, 0xb21f1f], 0xfdbb2d),
    level("TECH LABS", 2500.0, 8.0, [0x000428, 0x004e92], 0xffffff),
    level("ROBOT FACTORY", 3000.0, 8.5, [0x232526, 0x414345], 0xff4757),
    level("ORBITAL STATION", 3500.0, 9.0, [0x000000, 0x0f9b0f], 0x2ed573),
    level("DIGITAL DESERT", 4000.0, 9.5, [0x3a1c71, 0xd76d77], 0xffaf7b),
    level("CORE SYSTEM", 4500.0, 10.0, [0x141e30, 0x243b55], 0x00a8ff),
    level("VIRUS ZONE", 5000.0, 11.0, [0x000000, 0x330000], 0xff0000),
    level("THE MAINFRAME", 6000.0, 12.0, [0x000000, 0xffffff], 0xff00de),
];

/// Highest playable level number
pub const MAX_LEVEL: u32 = (LEVELS.len() - 1) as u32;

/// Look up a level by its 1-based number, clamped to the playable range
pub fn get(level: u32) -> &'static LevelData {
    let idx = (level.saturating_sub(1) as usize).min(LEVELS.len() - 2);
    &LEVELS[idx + 1]
}

/// Level that follows `level`, wrapping back to 1 after the last one
pub fn next(level: u32) -> u32 {
    if level < MAX_LEVEL { level + 1 } else { 1 }
}
