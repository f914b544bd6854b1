//! Visual particle effects
//!
//! Particles never affect gameplay. They are spawned by effect triggers,
//! drift linearly, fade, shrink, and are purged once dead.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Particle, ParticleKind};
use crate::Color;

/// Particles per explosion burst
pub const EXPLOSION_COUNT: usize = 15;
/// Particles per jump burst
pub const SPARK_COUNT: usize = 10;
/// Life lost per frame
pub const LIFE_DECAY: f32 = 0.03;
/// Size multiplier per frame
pub const SIZE_DECAY: f32 = 0.95;
/// Particles smaller than this are purged regardless of life
pub const MIN_SIZE: f32 = 0.01;
/// Default particle cap
pub const MAX_PARTICLES: usize = 500;

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    max_particles: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(MAX_PARTICLES)
    }
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    fn push(&mut self, particle: Particle) {
        if self.particles.len() < self.max_particles {
            self.particles.push(particle);
        }
    }

    /// Random size in `[1, 4)`
    fn random_size(rng: &mut dyn RandomSource) -> f32 {
        rng.next_f32() * 3.0 + 1.0
    }

    /// Random velocity with each axis in `[-2.5, 2.5)`
    fn random_burst(rng: &mut dyn RandomSource) -> Vec2 {
        let x = (rng.next_f32() - 0.5) * 5.0;
        let y = (rng.next_f32() - 0.5) * 5.0;
        Vec2::new(x, y)
    }

    /// Radial burst used for crashes, shield breaks and coin pickups
    pub fn spawn_explosion(&mut self, pos: Vec2, color: Color, rng: &mut dyn RandomSource) {
        self.spawn_burst(pos, color, ParticleKind::Explosion, EXPLOSION_COUNT, rng);
    }

    /// Burst under the player's feet on take-off
    pub fn spawn_sparks(&mut self, pos: Vec2, color: Color, rng: &mut dyn RandomSource) {
        self.spawn_burst(pos, color, ParticleKind::Spark, SPARK_COUNT, rng);
    }

    fn spawn_burst(
        &mut self,
        pos: Vec2,
        color: Color,
        kind: ParticleKind,
        count: usize,
        rng: &mut dyn RandomSource,
    ) {
        for _ in 0..count {
            let size = Self::random_size(rng);
            let vel = Self::random_burst(rng);
            self.push(Particle {
                pos,
                vel,
                color,
                kind,
                size,
                life: 1.0,
            });
        }
    }

    /// Single dust puff trailing the running player
    pub fn spawn_dust(&mut self, pos: Vec2, speed: f32, color: Color, rng: &mut dyn RandomSource) {
        let size = Self::random_size(rng);
        let vel = Vec2::new(-speed, -rng.next_f32());
        self.push(Particle {
            pos,
            vel,
            color,
            kind: ParticleKind::Dust,
            size,
            life: 1.0,
        });
    }

    /// Advance every particle one frame
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= LIFE_DECAY;
            p.size *= SIZE_DECAY;
        }
    }

    /// Drop dead particles
    pub fn compact(&mut self) {
        self.particles.retain(|p| p.life > 0.0 && p.size > MIN_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::sim::rng::SequenceSource;

    #[test]
    fn test_explosion_count_and_spread() {
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.99]);
        ps.spawn_explosion(Vec2::new(10.0, 20.0), palette::GOLD, &mut rng);
        assert_eq!(ps.len(), EXPLOSION_COUNT);
        for p in ps.iter() {
            assert_eq!(p.kind, ParticleKind::Explosion);
            assert_eq!(p.life, 1.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.vel.x.abs() <= 2.5 && p.vel.y.abs() <= 2.5);
        }
    }

    #[test]
    fn test_dust_trails_backwards() {
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        ps.spawn_dust(Vec2::ZERO, 6.0, palette::NEON_CYAN, &mut rng);
        let p = &ps.particles[0];
        assert_eq!(p.vel, Vec2::new(-6.0, -0.5));
        assert_eq!(p.kind, ParticleKind::Dust);
    }

    #[test]
    fn test_particles_die_after_decay() {
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::constant(0.5);
        ps.spawn_sparks(Vec2::ZERO, palette::WHITE, &mut rng);
        assert_eq!(ps.len(), SPARK_COUNT);

        // 1.0 / 0.03 = 33.3 frames of life
        for _ in 0..33 {
            ps.update();
            ps.compact();
        }
        assert_eq!(ps.len(), SPARK_COUNT);
        ps.update();
        ps.compact();
        assert!(ps.is_empty());
    }

    #[test]
    fn test_no_dead_particle_survives_compaction() {
        let mut ps = ParticleSystem::default();
        let mut rng = SequenceSource::new(vec![0.2, 0.8]);
        for i in 0..10 {
            ps.spawn_explosion(Vec2::splat(i as f32), palette::GOLD, &mut rng);
            ps.update();
            ps.compact();
            assert!(ps.iter().all(|p| p.life > 0.0));
        }
    }

    #[test]
    fn test_cap_limits_spawns() {
        let mut ps = ParticleSystem::new(20);
        let mut rng = SequenceSource::constant(0.5);
        ps.spawn_explosion(Vec2::ZERO, palette::GOLD, &mut rng);
        ps.spawn_explosion(Vec2::ZERO, palette::GOLD, &mut rng);
        assert_eq!(ps.len(), 20);
    }
}
