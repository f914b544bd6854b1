//! Collision detection between the player and scrolling entities
//!
//! Obstacles use an axis-aligned box test with an inset on the player's
//! leading edge and the obstacle's top edge, so grazing contacts are
//! forgiven. Items use a radius test against the player's torso.

use super::state::{Item, ItemKind, Obstacle, Player};
use crate::consts::{HITBOX_INSET, PICKUP_RADIUS};

/// Outcome of the player touching an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleHit {
    /// Shield absorbed the hit and is gone
    ShieldBroken,
    /// Unshielded hit; the run is over
    Fatal,
}

/// Outcome of the player touching an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    Coin,
    Shield,
}

/// Inset box overlap between player and obstacle
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    let (p, o) = (player.pos, obstacle.pos);
    p.x < o.x + obstacle.size.x
        && p.x + player.size.x - HITBOX_INSET > o.x
        && p.y < o.y + obstacle.size.y
        && p.y + player.size.y > o.y + HITBOX_INSET
}

/// Torso-to-center distance test
pub fn player_touches_item(player: &Player, item: &Item) -> bool {
    player.torso().distance(item.center()) < PICKUP_RADIUS
}

/// Test and resolve a player/obstacle contact.
///
/// Marked obstacles are skipped. A shielded hit consumes the shield and
/// marks the obstacle; a fatal hit leaves both untouched.
pub fn resolve_obstacle(player: &mut Player, obstacle: &mut Obstacle) -> Option<ObstacleHit> {
    if obstacle.marked || !player_hits_obstacle(player, obstacle) {
        return None;
    }
    if player.shield {
        player.set_shield(false);
        obstacle.marked = true;
        Some(ObstacleHit::ShieldBroken)
    } else {
        Some(ObstacleHit::Fatal)
    }
}

/// Test and resolve a player/item contact. Collected items are marked.
pub fn resolve_item(player: &mut Player, item: &mut Item) -> Option<Pickup> {
    if item.marked || !player_touches_item(player, item) {
        return None;
    }
    item.marked = true;
    Some(match item.kind {
        ItemKind::Coin => Pickup::Coin,
        ItemKind::Shield => {
            player.set_shield(true);
            Pickup::Shield
        }
    })
}

/// Right edge has scrolled past the left side of the screen
#[inline]
pub fn obstacle_offscreen(obstacle: &Obstacle) -> bool {
    obstacle.right() < 0.0
}

#[inline]
pub fn item_offscreen(item: &Item) -> bool {
    item.right() < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::sim::state::ObstacleKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn grounded_player() -> Player {
        Player {
            pos: Vec2::new(80.0, 420.0),
            grounded: true,
            ..Default::default()
        }
    }

    fn block_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::GlitchBlock,
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 50.0),
            color: palette::WHITE,
            marked: false,
        }
    }

    #[test]
    fn test_overlap() {
        let p = grounded_player();
        assert!(player_hits_obstacle(&p, &block_at(90.0, 450.0)));
        // fully ahead
        assert!(!player_hits_obstacle(&p, &block_at(200.0, 450.0)));
    }

    #[test]
    fn test_leading_edge_inset_forgives() {
        let p = grounded_player();
        // sprite right edge is 120, hitbox right edge is 105
        assert!(!player_hits_obstacle(&p, &block_at(110.0, 450.0)));
        assert!(player_hits_obstacle(&p, &block_at(104.0, 450.0)));
    }

    #[test]
    fn test_top_inset_forgives() {
        let p = grounded_player();
        // player feet at 500; obstacle top + 15 must be below the feet
        assert!(!player_hits_obstacle(&p, &block_at(90.0, 485.0)));
        assert!(player_hits_obstacle(&p, &block_at(90.0, 484.0)));
    }

    #[test]
    fn test_shield_absorbs_hit() {
        let mut p = grounded_player();
        p.shield = true;
        let mut o = block_at(90.0, 450.0);
        assert_eq!(resolve_obstacle(&mut p, &mut o), Some(ObstacleHit::ShieldBroken));
        assert!(!p.shield);
        assert!(o.marked);
        // already resolved this frame
        assert_eq!(resolve_obstacle(&mut p, &mut o), None);
    }

    #[test]
    fn test_unshielded_hit_is_fatal() {
        let mut p = grounded_player();
        let mut o = block_at(90.0, 450.0);
        assert_eq!(resolve_obstacle(&mut p, &mut o), Some(ObstacleHit::Fatal));
        assert!(!o.marked);
    }

    #[test]
    fn test_item_pickups() {
        let mut p = grounded_player();
        let torso = p.torso();

        let mut coin = Item::new(ItemKind::Coin, torso - Vec2::splat(15.0));
        assert_eq!(resolve_item(&mut p, &mut coin), Some(Pickup::Coin));
        assert!(coin.marked);
        assert_eq!(resolve_item(&mut p, &mut coin), None);

        let mut shield = Item::new(ItemKind::Shield, torso + Vec2::new(20.0, -15.0));
        assert_eq!(resolve_item(&mut p, &mut shield), Some(Pickup::Shield));
        assert!(p.shield);

        // second shield while shielded: state unchanged, item still consumed
        let mut again = Item::new(ItemKind::Shield, torso - Vec2::splat(15.0));
        assert_eq!(resolve_item(&mut p, &mut again), Some(Pickup::Shield));
        assert!(p.shield);
        assert!(again.marked);
    }

    #[test]
    fn test_item_out_of_reach() {
        let mut p = grounded_player();
        let mut coin = Item::new(ItemKind::Coin, p.torso() + Vec2::new(40.0, 0.0));
        assert_eq!(resolve_item(&mut p, &mut coin), None);
        assert!(!coin.marked);
    }

    #[test]
    fn test_offscreen() {
        assert!(!obstacle_offscreen(&block_at(-40.0, 0.0)));
        assert!(obstacle_offscreen(&block_at(-40.5, 0.0)));
        assert!(!item_offscreen(&Item::new(ItemKind::Coin, Vec2::new(-30.0, 0.0))));
        assert!(item_offscreen(&Item::new(ItemKind::Coin, Vec2::new(-31.0, 0.0))));
    }

    proptest! {
        #[test]
        fn far_obstacles_never_hit(dx in 120.0f32..2000.0, y in 0.0f32..600.0) {
            let p = grounded_player();
            prop_assert!(!player_hits_obstacle(&p, &block_at(p.pos.x + dx, y)));
        }

        #[test]
        fn pickup_matches_radius(dx in -100.0f32..100.0, dy in -100.0f32..100.0) {
            let p = grounded_player();
            let item = Item::new(ItemKind::Coin, p.torso() + Vec2::new(dx, dy) - Vec2::splat(15.0));
            let dist = (dx * dx + dy * dy).sqrt();
            prop_assume!((dist - PICKUP_RADIUS).abs() > 0.01);
            prop_assert_eq!(player_touches_item(&p, &item), dist < PICKUP_RADIUS);
        }
    }
}
