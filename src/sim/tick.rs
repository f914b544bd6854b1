//! Frame-driven simulation loop
//!
//! `Simulation` owns every piece of per-run state. The host calls
//! `start_run` to begin a level, then `frame` once per display refresh.
//! A frame only runs if the previous one scheduled it: terminal events
//! stop scheduling, and `cancel` revokes a pending frame.

use std::time::Duration;

use super::background::{self, generate_buildings};
use super::banner::{self, Banner};
use super::collision::{self, ObstacleHit, Pickup};
use super::particles::ParticleSystem;
use super::rng::{PcgSource, RandomSource};
use super::spawn::{maybe_spawn_item, maybe_spawn_obstacle};
use super::state::{
    Building, FrameReport, GameEvent, HostStatus, Item, Obstacle, Player, RunState, Viewport,
};
use crate::consts::SCORE_PER_SPEED;
use crate::levels;
use crate::palette;
use crate::renderer::draw::Canvas;
use crate::renderer::scene::{self, SceneStyle};
use crate::settings::Settings;

pub struct Simulation {
    pub run: RunState,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub items: Vec<Item>,
    pub particles: ParticleSystem,
    pub buildings: Vec<Building>,
    banner: Banner,
    rng: Box<dyn RandomSource>,
    style: SceneStyle,
    /// A frame has been requested and not yet run
    frame_pending: bool,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Simulation with an explicit random source
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            run: RunState::default(),
            player: Player::default(),
            obstacles: Vec::new(),
            items: Vec::new(),
            particles: ParticleSystem::default(),
            buildings: Vec::new(),
            banner: Banner::default(),
            rng,
            style: SceneStyle::default(),
            frame_pending: false,
            events: Vec::new(),
        }
    }

    /// Simulation configured from player settings
    pub fn from_settings(settings: &Settings) -> Self {
        let rng: Box<dyn RandomSource> = match settings.seed {
            Some(seed) => Box::new(PcgSource::seeded(seed)),
            None => Box::new(PcgSource::from_entropy()),
        };
        let mut sim = Self::new(rng);
        sim.particles = ParticleSystem::new(settings.max_particles());
        sim.style = SceneStyle {
            reduced_motion: settings.reduced_motion,
        };
        sim
    }

    /// Reset all per-run state for `level` and schedule the first frame.
    ///
    /// Used for new games, retries and next levels alike. Coins are not
    /// carried over between runs.
    pub fn start_run(&mut self, level: u32) {
        let data = levels::get(level);
        log::info!(
            "Starting level {} ({}): target {}m at speed {}",
            level,
            data.name,
            data.dist,
            data.speed
        );
        self.run = RunState::new(level, data.speed);
        self.player = Player::default();
        self.obstacles.clear();
        self.items.clear();
        self.particles.clear();
        self.buildings = generate_buildings(self.rng.as_mut());
        self.banner.cancel();
        self.events.clear();
        self.frame_pending = true;
    }

    /// Revoke any pending frame (host left the playing screen)
    pub fn cancel(&mut self) {
        self.frame_pending = false;
    }

    pub fn is_active(&self) -> bool {
        self.run.active
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Jump input. Ignored unless playing, the run is active and the
    /// player stands on the ground.
    pub fn jump(&mut self, status: HostStatus) -> bool {
        if status != HostStatus::Playing || !self.run.active {
            return false;
        }
        let jumped = self.player.jump(&mut self.particles, self.rng.as_mut());
        if jumped {
            self.events.push(GameEvent::Jumped);
        }
        jumped
    }

    /// Current banner text, clearing it if its time is up
    pub fn message(&mut self, now: Duration) -> Option<&'static str> {
        self.banner.poll(now)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run one scheduled frame.
    ///
    /// Returns `None` without touching any state when the host is not
    /// playing, no frame is pending, or the surface is unavailable.
    pub fn frame(
        &mut self,
        status: HostStatus,
        now: Duration,
        canvas: Option<&mut dyn Canvas>,
    ) -> Option<FrameReport> {
        if status != HostStatus::Playing || !self.frame_pending {
            return None;
        }
        let canvas = canvas?;
        let (width, height) = canvas.size()?;
        self.frame_pending = false;

        let viewport = Viewport::new(width as f32, height as f32);
        self.step(viewport, now, canvas);

        let level = levels::get(self.run.level);
        Some(FrameReport {
            score: self.run.score.floor() as u32,
            coins: self.run.coins,
            progress: self.run.progress(level.dist),
            message: self.banner.poll(now),
        })
    }

    fn step(&mut self, viewport: Viewport, now: Duration, canvas: &mut dyn Canvas) {
        let level = levels::get(self.run.level);
        let ground = viewport.ground_y();
        let (speed, frames) = (self.run.speed, self.run.frames);
        let rng = self.rng.as_mut();

        // Background
        scene::draw_sky(canvas, level);
        self.run.bg_offset = background::scroll(self.run.bg_offset, speed);
        scene::draw_buildings(
            canvas,
            &self.buildings,
            self.run.bg_offset,
            viewport,
            level,
            self.style,
            rng,
        );
        scene::draw_grid(canvas, frames, speed, viewport, level);

        // Spawners
        if let Some(obstacle) = maybe_spawn_obstacle(frames, speed, viewport, rng) {
            self.obstacles.push(obstacle);
        }
        if let Some(item) = maybe_spawn_item(frames, viewport, rng) {
            self.items.push(item);
        }

        // Player
        self.player
            .tick(ground, frames, speed, &mut self.particles, rng);
        scene::draw_player(canvas, &self.player, frames, self.style);

        // Obstacles
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed, frames);

            if self.run.active {
                match collision::resolve_obstacle(&mut self.player, obstacle) {
                    Some(ObstacleHit::ShieldBroken) => {
                        log::debug!("Shield absorbed {:?}", obstacle.kind);
                        self.banner.show(banner::SHIELD_BROKEN, now);
                        self.particles
                            .spawn_explosion(obstacle.pos, palette::NEON_CYAN, rng);
                        self.events.push(GameEvent::ShieldBroken);
                    }
                    Some(ObstacleHit::Fatal) => {
                        log::info!(
                            "Crashed into {:?} at {:.0}m on level {}",
                            obstacle.kind,
                            self.run.score,
                            self.run.level
                        );
                        self.particles
                            .spawn_explosion(self.player.pos, palette::NEON_PINK, rng);
                        self.run.active = false;
                        self.events.push(GameEvent::GameOver);
                    }
                    None => {}
                }
            }

            if collision::obstacle_offscreen(obstacle) {
                obstacle.marked = true;
            }
            if !obstacle.marked {
                scene::draw_obstacle(canvas, obstacle, self.style, rng);
            }
        }

        // Items
        for item in &mut self.items {
            item.advance(speed);
            if collision::item_offscreen(item) {
                item.marked = true;
            }

            if self.run.active {
                match collision::resolve_item(&mut self.player, item) {
                    Some(Pickup::Coin) => {
                        self.run.coins += 1;
                        self.particles.spawn_explosion(item.pos, palette::GOLD, rng);
                        self.events.push(GameEvent::CoinCollected);
                    }
                    Some(Pickup::Shield) => {
                        log::debug!("Shield collected");
                        self.banner.show(banner::SHIELD_ACTIVE, now);
                        self.events.push(GameEvent::ShieldCollected);
                    }
                    None => {}
                }
            }

            if !item.marked {
                item.spin();
                scene::draw_item(canvas, item);
            }
        }

        // Particles
        self.particles.update();
        for particle in self.particles.iter() {
            scene::draw_particle(canvas, particle);
        }

        self.compact();

        // Progress
        if self.run.active {
            self.run.score += speed as f64 * SCORE_PER_SPEED;
            self.run.frames += 1;

            if self.run.score >= level.dist {
                log::info!(
                    "Level {} complete in {} frames with {} coins",
                    self.run.level,
                    self.run.frames,
                    self.run.coins
                );
                self.run.active = false;
                self.events.push(GameEvent::LevelComplete);
            } else {
                self.frame_pending = true;
            }
        }
    }

    /// Drop everything marked or dead this frame
    fn compact(&mut self) {
        self.obstacles.retain(|o| !o.marked);
        self.items.retain(|i| !i.marked);
        self.particles.compact();
    }
}
