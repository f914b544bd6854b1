//! Player physics and power-up state

use glam::Vec2;

use super::particles::ParticleSystem;
use super::rng::RandomSource;
use super::state::Player;
use crate::palette;

/// Frames between dust puffs while running on the ground
pub const DUST_INTERVAL: u64 = 5;

impl Player {
    /// Apply gravity, integrate, and clamp to the ground.
    ///
    /// Spawns a dust puff every `DUST_INTERVAL` frames while grounded.
    pub fn tick(
        &mut self,
        ground_y: f32,
        frames: u64,
        speed: f32,
        particles: &mut ParticleSystem,
        rng: &mut dyn RandomSource,
    ) {
        self.dy += self.gravity;
        self.pos.y += self.dy;

        let floor = ground_y - self.size.y;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.dy = 0.0;
            self.grounded = true;
            if frames % DUST_INTERVAL == 0 {
                let feet = Vec2::new(self.pos.x, self.pos.y + self.size.y);
                particles.spawn_dust(feet, speed, palette::NEON_CYAN, rng);
            }
        } else {
            self.grounded = false;
        }
    }

    /// Launch upward if standing on the ground. Returns false (and changes
    /// nothing) when airborne.
    pub fn jump(&mut self, particles: &mut ParticleSystem, rng: &mut dyn RandomSource) -> bool {
        if !self.grounded {
            return false;
        }
        self.dy = self.jump_force;
        let launch = self.pos + Vec2::new(20.0, 80.0);
        particles.spawn_sparks(launch, palette::WHITE, rng);
        true
    }

    pub fn set_shield(&mut self, on: bool) {
        self.shield = on;
    }

    /// Point used for item pickups
    #[inline]
    pub fn torso(&self) -> Vec2 {
        self.pos + Vec2::new(20.0, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::particles::SPARK_COUNT;
    use crate::sim::rng::SequenceSource;
    use crate::sim::state::ParticleKind;

    const GROUND: f32 = 500.0;

    fn settle(p: &mut Player, ps: &mut ParticleSystem, rng: &mut SequenceSource) {
        for f in 0..200 {
            p.tick(GROUND, f, 6.0, ps, rng);
        }
    }

    #[test]
    fn test_falls_to_ground() {
        let mut p = Player::default();
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        settle(&mut p, &mut ps, &mut rng);
        assert!(p.grounded);
        assert_eq!(p.pos.y, GROUND - PLAYER_HEIGHT);
        assert_eq!(p.dy, 0.0);
    }

    #[test]
    fn test_dust_every_fifth_frame_on_ground() {
        let mut p = Player::default();
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        settle(&mut p, &mut ps, &mut rng);
        ps.clear();
        for f in 0..10 {
            p.tick(GROUND, f, 6.0, &mut ps, &mut rng);
        }
        assert_eq!(ps.len(), 2);
        assert!(ps.iter().all(|d| d.kind == ParticleKind::Dust));
    }

    #[test]
    fn test_jump_from_ground() {
        let mut p = Player::default();
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        settle(&mut p, &mut ps, &mut rng);
        ps.clear();

        assert!(p.jump(&mut ps, &mut rng));
        assert_eq!(p.dy, JUMP_FORCE);
        assert_eq!(ps.len(), SPARK_COUNT);

        p.tick(GROUND, 1, 6.0, &mut ps, &mut rng);
        assert!(!p.grounded);
        assert!(p.pos.y < GROUND - PLAYER_HEIGHT);
    }

    #[test]
    fn test_jump_in_air_is_noop() {
        let mut p = Player::default();
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        p.tick(GROUND, 1, 6.0, &mut ps, &mut rng);
        assert!(!p.grounded);
        let dy = p.dy;

        assert!(!p.jump(&mut ps, &mut rng));
        assert_eq!(p.dy, dy);
        assert!(ps.is_empty());
    }

    #[test]
    fn test_jump_lands_after_forty_frames() {
        let mut p = Player::default();
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        settle(&mut p, &mut ps, &mut rng);
        p.jump(&mut ps, &mut rng);

        let mut airborne = 0;
        for f in 0..100 {
            p.tick(GROUND, f, 6.0, &mut ps, &mut rng);
            if p.grounded {
                break;
            }
            airborne += 1;
        }
        assert!((38..=41).contains(&airborne), "airborne {airborne} frames");
    }

    #[test]
    fn test_torso_offset() {
        let p = Player::default();
        assert_eq!(p.torso(), Vec2::new(PLAYER_X + 20.0, 40.0));
    }
}
