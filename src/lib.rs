//! Light Cycles - a two-player trail game for the terminal
//!
//! This library provides:
//! - Core game logic: cycle movement, trail growth and collisions (game module)
//! - Keyboard mapping for two players (input module)
//! - TUI rendering (render module)
//! - Per-session results (metrics module)
//! - The interactive two-player mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
