//! Periodic re-broadcast of the server state
use core::time::Duration;

use bevy_time::{Timer, TimerMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Interval between two broadcasts of the inputs, in milliseconds
    pub input_interval_ms: u64,
    /// Interval between two broadcasts of the poses, in milliseconds
    pub pose_interval_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            input_interval_ms: 50,
            pose_interval_ms: 500,
        }
    }
}

impl SyncConfig {
    pub fn input_interval(&self) -> Duration {
        Duration::from_millis(self.input_interval_ms)
    }

    pub fn pose_interval(&self) -> Duration {
        Duration::from_millis(self.pose_interval_ms)
    }
}

/// Which broadcasts are due after a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncDue {
    pub input: bool,
    pub pose: bool,
}

impl SyncDue {
    pub fn any(&self) -> bool {
        self.input || self.pose
    }
}

/// Timers of the periodic input and pose broadcasts
#[derive(Debug, Clone)]
pub struct SyncSchedule {
    input: Timer,
    pose: Timer,
}

impl Default for SyncSchedule {
    fn default() -> Self {
        Self::new(&SyncConfig::default())
    }
}

impl SyncSchedule {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            input: Timer::new(config.input_interval(), TimerMode::Repeating),
            pose: Timer::new(config.pose_interval(), TimerMode::Repeating),
        }
    }

    /// Advances both timers.
    ///
    /// A timer that fired several times during `delta` only triggers one broadcast.
    pub fn tick(&mut self, delta: Duration) -> SyncDue {
        SyncDue {
            input: self.input.tick(delta).just_finished(),
            pose: self.pose.tick(delta).just_finished(),
        }
    }
}
