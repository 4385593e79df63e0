//! Torus Snake - a terminal snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - In-session stats (metrics module)
//! - The game loop driver (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
