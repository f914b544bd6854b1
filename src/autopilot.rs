//! Attract-mode input
//!
//! Decides when to press jump by looking at the nearest obstacle that would
//! hit a player standing on the ground.

use crate::consts::HITBOX_INSET;
use crate::sim::{Obstacle, Player, Simulation};

/// How many frames ahead of contact to jump
pub const LEAD_FRAMES: f32 = 8.0;

/// Whether `obstacle` overlaps the standing player's hitbox vertically
fn threatens(player: &Player, obstacle: &Obstacle) -> bool {
    player.pos.y < obstacle.pos.y + obstacle.size.y
        && player.pos.y + player.size.y > obstacle.pos.y + HITBOX_INSET
}

/// Horizontal gap between the player's hitbox front and the obstacle
fn gap(player: &Player, obstacle: &Obstacle) -> f32 {
    obstacle.pos.x - (player.pos.x + player.size.x - HITBOX_INSET)
}

/// Jump when grounded and a threatening obstacle is within
/// `speed * LEAD_FRAMES` pixels
pub fn should_jump(sim: &Simulation) -> bool {
    let player = &sim.player;
    if !sim.is_active() || !player.grounded {
        return false;
    }
    let reach = sim.run.speed * LEAD_FRAMES;
    sim.obstacles
        .iter()
        .filter(|o| !o.marked && threatens(player, o))
        .map(|o| gap(player, o))
        .filter(|&d| d > 0.0)
        .min_by(f32::total_cmp)
        .is_some_and(|d| d <= reach)
}
