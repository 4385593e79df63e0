//! Core game logic module
//!
//! This module contains all the game logic without any I/O dependencies:
//! the toroidal grid, the snake state machine, and the food placement.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepOutcome};
pub use state::{Cell, Food, GameState, Snake};
