//! Power-up banner with a timed auto-clear
//!
//! The clear is a one-shot scheduled against host-supplied time. Showing a
//! new message reschedules it; `cancel` drops both message and schedule.

use std::time::Duration;

use crate::consts::BANNER_SECS;

pub const SHIELD_ACTIVE: &str = "SHIELD ACTIVE";
pub const SHIELD_BROKEN: &str = "SHIELD BROKEN";

#[derive(Debug, Clone, Default)]
pub struct Banner {
    message: Option<&'static str>,
    clear_at: Option<Duration>,
}

impl Banner {
    /// Show `message` until `now + BANNER_SECS`
    pub fn show(&mut self, message: &'static str, now: Duration) {
        self.message = Some(message);
        self.clear_at = Some(now + Duration::from_secs_f32(BANNER_SECS));
    }

    /// Current message, running the scheduled clear if it is due
    pub fn poll(&mut self, now: Duration) -> Option<&'static str> {
        if self.clear_at.is_some_and(|due| now >= due) {
            self.cancel();
        }
        self.message
    }

    pub fn cancel(&mut self) {
        self.message = None;
        self.clear_at = None;
    }
}
