use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::actor::Color;
use super::point::Point;

/// Which cycle is marked dead when a head strikes a trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathPolicy {
    /// Every cycle whose own head struck a trail segment dies
    #[default]
    Collider,
    /// Any collision kills the second cycle, whoever caused it
    SecondPlayer,
}

/// Fastest tick rate the game loop can schedule with millisecond periods
pub const MAX_TICKS_PER_SECOND: u32 = 1000;

/// Reasons a configuration cannot be used to start a round
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),

    #[error("playing field must be positive, got {max_x}x{max_y}")]
    FieldBounds { max_x: i32, max_y: i32 },

    #[error("initial cycle length must be at least 1")]
    EmptyCycle,

    #[error("tick rate must be between 1 and {max} per second, got {0}", max = MAX_TICKS_PER_SECOND)]
    TickRate(u32),

    #[error("playing field {max_x}x{max_y} is not a whole number of {cell_size}-unit cells")]
    UnalignedField {
        max_x: i32,
        max_y: i32,
        cell_size: i32,
    },

    #[error("start position for player {player} is outside the field: ({x}, {y})")]
    StartOutOfBounds { player: usize, x: i32, y: i32 },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance a cycle travels per tick, in field units
    pub cell_size: i32,
    /// Width of the playing field in field units
    pub max_x: i32,
    /// Height of the playing field in field units
    pub max_y: i32,
    /// Number of segments a cycle starts with
    pub initial_cycle_length: usize,
    /// Head positions of player one and player two at round start
    pub player_starts: [Point; 2],
    pub player_colors: [Color; 2],
    /// Color used for a cycle once it has crashed
    pub dead_color: Color,
    pub death_policy: DeathPolicy,
    pub ticks_per_second: u32,
    /// Whether positions wrap around the field edges
    pub wrap_field: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 15,
            max_x: 900,
            max_y: 600,
            initial_cycle_length: 8,
            player_starts: [Point::new(300, 195), Point::new(300, 405)],
            player_colors: [Color::RED, Color::GREEN],
            dead_color: Color::WHITE,
            death_policy: DeathPolicy::default(),
            ticks_per_second: 12,
            wrap_field: true,
        }
    }
}

impl GameConfig {
    /// Width of the field in grid cells
    pub fn columns(&self) -> i32 {
        self.max_x / self.cell_size
    }

    /// Height of the field in grid cells
    pub fn rows(&self) -> i32 {
        self.max_y / self.cell_size
    }

    /// Where the game over message goes
    pub fn center(&self) -> Point {
        Point::new(self.max_x / 2, self.max_y / 2)
    }

    /// Load a configuration from a JSON file; missing fields take their
    /// default values
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse game configuration")?;
        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.max_x <= 0 || self.max_y <= 0 {
            return Err(ConfigError::FieldBounds {
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }
        if self.max_x % self.cell_size != 0 || self.max_y % self.cell_size != 0 {
            return Err(ConfigError::UnalignedField {
                max_x: self.max_x,
                max_y: self.max_y,
                cell_size: self.cell_size,
            });
        }
        if self.initial_cycle_length == 0 {
            return Err(ConfigError::EmptyCycle);
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(ConfigError::TickRate(self.ticks_per_second));
        }
        for (player, start) in self.player_starts.iter().enumerate() {
            let inside = (0..self.max_x).contains(&start.x) && (0..self.max_y).contains(&start.y);
            if !inside {
                return Err(ConfigError::StartOutOfBounds {
                    player: player + 1,
                    x: start.x,
                    y: start.y,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 15);
        assert_eq!(config.max_x, 900);
        assert_eq!(config.max_y, 600);
        assert_eq!(config.columns(), 60);
        assert_eq!(config.rows(), 40);
        assert_eq!(config.center(), Point::new(450, 300));
        assert_eq!(config.death_policy, DeathPolicy::Collider);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0)));

        let config = GameConfig {
            initial_cycle_length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyCycle));

        let config = GameConfig {
            max_y: -1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldBounds { .. })
        ));

        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TickRate(0)));
    }

    #[test]
    fn test_validate_rejects_tick_rate_too_fast_for_the_loop() {
        let config = GameConfig {
            ticks_per_second: 2000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TickRate(2000)));

        let config = GameConfig {
            ticks_per_second: MAX_TICKS_PER_SECOND,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_field_off_the_grid() {
        let config = GameConfig {
            max_x: 905,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnalignedField {
                max_x: 905,
                max_y: 600,
                cell_size: 15
            })
        );

        let config = GameConfig {
            cell_size: 10,
            max_y: 605,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnalignedField { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_start_outside_field() {
        let mut config = GameConfig::default();
        config.player_starts[1] = Point::new(900, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds {
                player: 2,
                x: 900,
                y: 10
            })
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("light_cycles_config_test.json");
        std::fs::write(&path, r#"{ "max_x": 450, "max_y": 300, "player_starts": [{"x": 30, "y": 30}, {"x": 30, "y": 270}] }"#)
            .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.max_x, 450);
        assert_eq!(config.player_starts[1], Point::new(30, 270));

        std::fs::write(&path, r#"{ "cell_size": -3 }"#).unwrap();
        assert!(GameConfig::load(&path).is_err());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/light_cycles.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "cell_size": 10, "death_policy": "second_player" }"#)
                .unwrap();
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.death_policy, DeathPolicy::SecondPlayer);
        assert_eq!(config.max_x, 900);
        assert_eq!(config.initial_cycle_length, 8);
    }
}
