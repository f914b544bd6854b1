//! Cyber Princess entry point
//!
//! Headless attract-mode driver: the autopilot plays levels at a fixed
//! 60 Hz clock into an off-screen draw list.
//!
//! Usage: `cyber-princess [LEVELS] [low|medium|high]`

use std::time::Duration;

use cyber_princess::autopilot;
use cyber_princess::renderer::{DrawList, ScreenUniform, tessellate, upload_size};
use cyber_princess::sim::HostStatus;
use cyber_princess::{GameShell, QualityPreset, Settings};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);
/// Give up on a level after ten minutes of game time
const MAX_FRAMES_PER_LEVEL: u32 = 60 * 600;
/// Frames between tessellation stats in the debug log
const STATS_INTERVAL: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Cyber Princess (native) starting...");

    let mut args = std::env::args().skip(1);
    let levels_to_play: u32 = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad level count ({e}), playing 1");
            1
        }
        None => 1,
    };

    let mut settings = Settings::load();
    if let Some(arg) = args.next() {
        match QualityPreset::parse(&arg) {
            Some(preset) => settings.quality = preset,
            None => log::warn!("Unknown quality preset '{arg}', keeping {}", settings.quality.as_str()),
        }
    }

    let mut shell = GameShell::new(&settings);
    let mut canvas = DrawList::new(WIDTH, HEIGHT);
    let screen = ScreenUniform::new(WIDTH, HEIGHT);
    let mut now = Duration::ZERO;
    let mut cleared = 0;

    shell.start_game();
    while cleared < levels_to_play {
        let mut frames = 0;
        while shell.status() == HostStatus::Playing && frames < MAX_FRAMES_PER_LEVEL {
            if autopilot::should_jump(&shell.sim) {
                shell.jump();
            }
            shell.frame(now, Some(&mut canvas));
            now += FRAME_TIME;
            frames += 1;

            if frames % STATS_INTERVAL == 0 {
                let vertices = tessellate(&canvas.commands, WIDTH as f32, HEIGHT as f32);
                let hud = shell.hud();
                log::debug!(
                    "{}m ({:.1}%), {} coins: {} commands, {} vertices, {} bytes",
                    hud.score,
                    hud.progress,
                    hud.coins,
                    canvas.len(),
                    vertices.len(),
                    upload_size(&vertices, &screen)
                );
            }
        }

        let hud = shell.hud();
        match shell.status() {
            HostStatus::LevelComplete => {
                cleared += 1;
                println!(
                    "{}: cleared {}m with {} coins",
                    shell.level_data().name,
                    hud.score,
                    hud.coins
                );
                if cleared < levels_to_play {
                    shell.next_level();
                }
            }
            HostStatus::GameOver => {
                println!(
                    "{}: crashed at {}m ({:.1}%)",
                    shell.level_data().name,
                    hud.score,
                    hud.progress
                );
                break;
            }
            status => {
                log::warn!("Stopped after {frames} frames in {status:?}");
                break;
            }
        }
    }

    log::info!("Cleared {cleared} of {levels_to_play} levels");
}
