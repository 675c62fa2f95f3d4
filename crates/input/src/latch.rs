//! Soft drop release emulation.
//!
//! Many terminals report only presses (and OS auto-repeats as presses). On
//! those, a held down key looks like a stream of presses with no release, so
//! the latch synthesizes `SoftDropStop` once no down-key press has arrived for
//! the grace window. As soon as a real release is observed the terminal is
//! known to report releases and emulation switches off.

use crate::types::{GameCommand, SOFT_DROP_GRACE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDropLatch {
    held: bool,
    since_press_ms: u32,
    grace_ms: u32,
    releases_reported: bool,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            grace_ms,
            releases_reported: false,
        }
    }

    /// Observe a command produced by the key map.
    pub fn observe(&mut self, command: GameCommand) {
        match command {
            GameCommand::SoftDropStart => {
                self.held = true;
                self.since_press_ms = 0;
            }
            GameCommand::SoftDropStop => {
                self.held = false;
                self.releases_reported = true;
            }
            GameCommand::Start | GameCommand::Restart => {
                self.held = false;
            }
            _ => {}
        }
    }

    /// Advance by `elapsed_ms`; yields a synthetic stop when the grace expires.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameCommand> {
        if !self.held || self.releases_reported {
            return None;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms >= self.grace_ms {
            self.held = false;
            return Some(GameCommand::SoftDropStop);
        }
        None
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
