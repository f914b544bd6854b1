//! Host shell: screen status, level progression and HUD
//!
//! Owns the `Simulation` and drives it from the outside the way a UI layer
//! would. Every transition into `Playing` goes through `Simulation::start_run`.

use std::time::Duration;

use crate::levels::{self, LevelData};
use crate::renderer::draw::Canvas;
use crate::settings::Settings;
use crate::sim::{GameEvent, HostStatus, Simulation};

/// Values shown over the playfield
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hud {
    /// Distance in meters
    pub score: u32,
    pub coins: u32,
    /// 0..=100
    pub progress: f32,
    pub message: Option<&'static str>,
    pub level_name: &'static str,
}

/// Static text for a full-screen menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuScreen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
}

pub const START_SCREEN: MenuScreen = MenuScreen {
    title: "CYBER PRINCESS",
    subtitle: "Tap to jump. Dodge drones. Hack the system.",
    button: "START MISSION",
};

pub const GAME_OVER_SCREEN: MenuScreen = MenuScreen {
    title: "SYSTEM FAILURE",
    subtitle: "You collided with a firewall.",
    button: "REBOOT SYSTEM",
};

pub const LEVEL_COMPLETE_SCREEN: MenuScreen = MenuScreen {
    title: "SECTOR CLEARED",
    subtitle: "Data transfer complete.",
    button: "NEXT SECTOR",
};

pub struct GameShell {
    status: HostStatus,
    level: u32,
    hud: Hud,
    pub sim: Simulation,
}

impl GameShell {
    pub fn new(settings: &Settings) -> Self {
        Self::with_simulation(Simulation::from_settings(settings))
    }

    pub fn with_simulation(sim: Simulation) -> Self {
        Self {
            status: HostStatus::Start,
            level: 1,
            hud: Hud::default(),
            sim,
        }
    }

    pub fn status(&self) -> HostStatus {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_data(&self) -> &'static LevelData {
        levels::get(self.level)
    }

    pub fn hud(&self) -> Hud {
        self.hud
    }

    /// Menu overlay for the current status, if any
    pub fn screen(&self) -> Option<MenuScreen> {
        match self.status {
            HostStatus::Start => Some(START_SCREEN),
            HostStatus::GameOver => Some(GAME_OVER_SCREEN),
            HostStatus::LevelComplete => Some(LEVEL_COMPLETE_SCREEN),
            HostStatus::Playing => None,
        }
    }

    /// Start button: begin at level 1
    pub fn start_game(&mut self) -> bool {
        if self.status != HostStatus::Start {
            log::warn!("start_game ignored in {:?}", self.status);
            return false;
        }
        self.play(1);
        true
    }

    /// Reboot button: replay the current level
    pub fn retry_level(&mut self) -> bool {
        if self.status != HostStatus::GameOver {
            log::warn!("retry_level ignored in {:?}", self.status);
            return false;
        }
        self.play(self.level);
        true
    }

    /// Next-sector button: advance, wrapping to level 1 after the last
    pub fn next_level(&mut self) -> bool {
        if self.status != HostStatus::LevelComplete {
            log::warn!("next_level ignored in {:?}", self.status);
            return false;
        }
        self.play(levels::next(self.level));
        true
    }

    /// Pointer-down, touch-start or jump key
    pub fn jump(&mut self) -> bool {
        self.sim.jump(self.status)
    }

    fn play(&mut self, level: u32) {
        self.level = level;
        self.hud = Hud {
            level_name: levels::get(level).name,
            ..Hud::default()
        };
        self.sim.start_run(level);
        self.status = HostStatus::Playing;
    }

    fn set_status(&mut self, status: HostStatus) {
        if status != HostStatus::Playing {
            self.sim.cancel();
        }
        self.status = status;
    }

    /// Drive one display refresh
    pub fn frame(&mut self, now: Duration, canvas: Option<&mut dyn Canvas>) {
        if let Some(report) = self.sim.frame(self.status, now, canvas) {
            self.hud = Hud {
                score: report.score,
                coins: report.coins,
                progress: report.progress,
                message: report.message,
                level_name: self.hud.level_name,
            };
        } else {
            self.hud.message = self.sim.message(now);
        }

        for event in self.sim.drain_events() {
            match event {
                GameEvent::GameOver => self.set_status(HostStatus::GameOver),
                GameEvent::LevelComplete => self.set_status(HostStatus::LevelComplete),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw::DrawList;
    use crate::sim::{Obstacle, ObstacleKind, SequenceSource};
    use glam::Vec2;

    fn shell() -> GameShell {
        GameShell::with_simulation(Simulation::new(Box::new(SequenceSource::constant(0.1))))
    }

    fn run_frames(shell: &mut GameShell, canvas: &mut DrawList, n: usize) {
        for _ in 0..n {
            shell.frame(Duration::ZERO, Some(&mut *canvas));
            shell.sim.obstacles.clear();
        }
    }

    #[test]
    fn test_start_screen() {
        let shell = shell();
        assert_eq!(shell.status(), HostStatus::Start);
        assert_eq!(shell.screen(), Some(START_SCREEN));
    }

    #[test]
    fn test_buttons_only_work_on_their_screen() {
        let mut shell = shell();
        assert!(!shell.retry_level());
        assert!(!shell.next_level());
        assert!(shell.start_game());
        assert_eq!(shell.status(), HostStatus::Playing);
        assert_eq!(shell.hud().level_name, "NEO TOKYO");
        assert!(shell.screen().is_none());
        assert!(!shell.start_game());
    }

    #[test]
    fn test_complete_then_next_level() {
        let mut shell = shell();
        let mut canvas = DrawList::new(1280, 720);
        shell.start_game();
        run_frames(&mut shell, &mut canvas, 3334);

        assert_eq!(shell.status(), HostStatus::LevelComplete);
        assert_eq!(shell.hud().progress, 100.0);
        assert_eq!(shell.hud().score, 1000);

        assert!(shell.next_level());
        assert_eq!(shell.level(), 2);
        assert_eq!(shell.level_data().name, "DATA HIGHWAY");
        assert_eq!(shell.hud().score, 0);
        assert_eq!(shell.hud().level_name, "DATA HIGHWAY");
        assert!(shell.sim.frame_pending());
    }

    #[test]
    fn test_crash_then_retry_same_level() {
        let mut shell = shell();
        let mut canvas = DrawList::new(1280, 720);
        shell.start_game();
        run_frames(&mut shell, &mut canvas, 60);
        shell.sim.run.coins = 3;

        let p = shell.sim.player.pos;
        shell.sim.obstacles.push(Obstacle {
            kind: ObstacleKind::HoverCar,
            pos: p + Vec2::new(10.0, 40.0),
            size: Vec2::new(100.0, 40.0),
            color: crate::palette::HOVER_ORANGE,
            marked: false,
        });
        shell.frame(Duration::ZERO, Some(&mut canvas));
        assert_eq!(shell.status(), HostStatus::GameOver);
        assert_eq!(shell.screen(), Some(GAME_OVER_SCREEN));
        assert!(!shell.sim.frame_pending());
        assert!(!shell.jump());

        assert!(shell.retry_level());
        assert_eq!(shell.level(), 1);
        assert_eq!(shell.sim.run.coins, 0);
        assert!(shell.sim.is_active());
    }

    #[test]
    fn test_last_level_wraps_to_first() {
        let mut shell = shell();
        shell.play(levels::MAX_LEVEL);
        shell.set_status(HostStatus::LevelComplete);
        assert!(shell.next_level());
        assert_eq!(shell.level(), 1);
    }
}
