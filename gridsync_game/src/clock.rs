//! Lifecycle of a match
use core::time::Duration;

use bevy_time::{Timer, TimerMode};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Length of a match, in milliseconds
    pub duration_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            duration_ms: 60_000,
        }
    }
}

impl MatchConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the game to start
    #[default]
    Lobby,
    Playing,
    Ended,
}

/// Times a match from its start to its end
#[derive(Debug, Clone)]
pub struct MatchClock {
    phase: MatchPhase,
    timer: Timer,
}

impl MatchClock {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            phase: MatchPhase::Lobby,
            timer: Timer::new(config.duration(), TimerMode::Once),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Starts the match from the lobby. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != MatchPhase::Lobby {
            return false;
        }
        self.timer.reset();
        self.phase = MatchPhase::Playing;
        info!(duration = ?self.timer.duration(), "match started");
        true
    }

    /// Ends the match early, e.g. when the server sent the final scores
    pub fn end(&mut self) {
        self.phase = MatchPhase::Ended;
    }

    /// Advances the clock while playing.
    ///
    /// Returns true on the call that ends the match, and false on every other call.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.phase != MatchPhase::Playing {
            return false;
        }
        if self.timer.tick(delta).just_finished() {
            self.phase = MatchPhase::Ended;
            info!("match ended");
            return true;
        }
        false
    }

    /// Goes back to the lobby for another match
    pub fn reset(&mut self) {
        self.phase = MatchPhase::Lobby;
        self.timer.reset();
    }
}
