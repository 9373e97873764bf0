//! Core game logic for light cycles
//!
//! Movement, growth and collision rules without any I/O or rendering
//! dependencies. A `Round` drives one play session tick by tick.

pub mod action;
pub mod actor;
pub mod cast;
pub mod collision;
pub mod config;
pub mod cycle;
pub mod engine;
pub mod point;
pub mod score;

// Re-export commonly used types
pub use action::{Direction, Player, Turn};
pub use actor::{Actor, Banner, Color};
pub use cast::Cast;
pub use collision::{CollisionResolver, GAME_OVER_TEXT, RoundStatus};
pub use config::{ConfigError, DeathPolicy, GameConfig};
pub use cycle::{BODY_GLYPH, Cycle, HEAD_GLYPH, Segment};
pub use engine::Round;
pub use point::Point;
pub use score::Score;
