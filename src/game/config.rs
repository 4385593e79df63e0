use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Logic ticks per second
    pub ticks_per_second: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            ticks_per_second: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    ///
    /// Dimensions are clamped to at least 2 cells per axis.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width.max(2),
            grid_height: height.max(2),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Duration of one logic tick; never zero, whatever the rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis((1000 / self.ticks_per_second.max(1)).max(1))
    }
}
