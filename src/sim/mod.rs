//! Simulation module
//!
//! All gameplay logic lives here:
//! - One discrete step per display frame, no wall-clock physics
//! - Randomness only through an injectable `RandomSource`
//! - Removal by mark-then-compact, once per frame
//! - Drawing goes through the `Canvas` abstraction, never a concrete backend

pub mod background;
pub mod banner;
pub mod collision;
pub mod particles;
pub mod player;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{ObstacleHit, Pickup, resolve_item, resolve_obstacle};
pub use particles::ParticleSystem;
pub use rng::{PcgSource, RandomSource, SequenceSource};
pub use state::{
    Building, FrameReport, GameEvent, HostStatus, Item, ItemKind, Obstacle, ObstacleKind,
    Particle, ParticleKind, Player, RunState, Viewport,
};
pub use tick::Simulation;
