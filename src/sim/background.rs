//! Parallax city skyline and grid floor geometry
//!
//! Buildings are generated once per run and never destroyed: their screen
//! position wraps via a modulo of the scrolling offset.

use super::rng::RandomSource;
use super::state::{Building, Viewport};
use crate::consts::{BUILDING_COUNT, PARALLAX_FACTOR};
use crate::palette;

/// Offset at which the parallax scroll resets to 0
pub const SCROLL_RESET: f32 = -1000.0;
/// Extra horizontal span buildings wrap through, beyond the viewport
pub const WRAP_MARGIN: f32 = 200.0;
/// Spacing of the slanted grid lines
pub const GRID_SPACING: f32 = 50.0;
/// Vertical spacing of window lights
pub const LIGHT_SPACING: f32 = 40.0;
/// Height of the dark floor band below the ground line
pub const FLOOR_DEPTH: f32 = 100.0;

/// Generate a fresh skyline
pub fn generate_buildings(rng: &mut dyn RandomSource) -> Vec<Building> {
    (0..BUILDING_COUNT)
        .map(|i| {
            let w = 50.0 + rng.next_f32() * 80.0;
            let h = 100.0 + rng.next_f32() * 300.0;
            let color = if rng.roll_above(0.5) {
                palette::BUILDING_DARK
            } else {
                palette::BUILDING_LIGHT
            };
            let lights = rng.roll_above(0.3);
            Building {
                x: i as f32 * 100.0,
                w,
                h,
                color,
                lights,
            }
        })
        .collect()
}

/// Advance the parallax offset by one frame
pub fn scroll(offset: f32, speed: f32) -> f32 {
    let next = offset - speed * PARALLAX_FACTOR;
    if next < SCROLL_RESET { 0.0 } else { next }
}

/// On-screen x of a building for the current offset
pub fn building_screen_x(building: &Building, offset: f32, viewport: Viewport) -> f32 {
    let span = viewport.width + WRAP_MARGIN;
    // `%` keeps the sign of the dividend, so negative positions wrap once here
    let mut x = (building.x + offset) % span;
    if x < -WRAP_MARGIN / 2.0 {
        x += span;
    }
    x
}

/// Top edge of a building (buildings sit on the ground line)
pub fn building_top(building: &Building, viewport: Viewport) -> f32 {
    viewport.height - FLOOR_DEPTH - building.h
}

/// Y offsets (from the building top) of window light rows
pub fn light_rows(building: &Building) -> impl Iterator<Item = f32> + '_ {
    (0..)
        .map(|j| j as f32 * LIGHT_SPACING)
        .take_while(move |&y| y < building.h)
}

/// X origins of the slanted grid lines for a frame.
///
/// Each origin `x` yields a line from `(x + 50, ground)` to `(x - 50, bottom)`.
pub fn grid_line_origins(frames: u64, speed: f32, width: f32) -> impl Iterator<Item = f32> {
    let shift = (frames as f32 * speed) % GRID_SPACING;
    (0..)
        .map(move |i| -shift + i as f32 * GRID_SPACING)
        .take_while(move |&x| x < width)
}
