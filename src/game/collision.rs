//! Collision detection and the end of a round

use tracing::{debug, info};

use super::action::Player;
use super::actor::{Actor, Banner};
use super::cast::Cast;
use super::config::{DeathPolicy, GameConfig};
use super::point::Point;

pub const GAME_OVER_TEXT: &str = "Game Over!";

/// Outcome of a resolver pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    /// The round has ended; `losers` lists the cycles marked dead
    GameOver { losers: Vec<Player> },
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, RoundStatus::GameOver { .. })
    }
}

/// Checks heads against trails once per tick and ends the round on a hit.
///
/// Once the round is over every further `execute` is a no-op.
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    policy: DeathPolicy,
    center: Point,
    is_game_over: bool,
    losers: Vec<Player>,
}

impl CollisionResolver {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            policy: config.death_policy,
            center: config.center(),
            is_game_over: false,
            losers: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_game_over {
            RoundStatus::GameOver {
                losers: self.losers.clone(),
            }
        } else {
            RoundStatus::Playing
        }
    }

    pub fn execute(&mut self, cast: &mut Cast) -> RoundStatus {
        if self.is_game_over {
            return self.status();
        }

        self.handle_segment_collision(cast);

        if self.is_game_over {
            self.handle_game_over(cast);
        } else {
            cast.score_mut().add_points(1);
        }

        self.status()
    }

    fn handle_segment_collision(&mut self, cast: &mut Cast) {
        let struck = Self::struck_players(cast);
        if struck.is_empty() {
            return;
        }
        debug!(?struck, "head struck a trail");

        let losers = match self.policy {
            DeathPolicy::Collider => struck,
            DeathPolicy::SecondPlayer => vec![Player::Two],
        };
        for &player in &losers {
            cast.cycle_mut(player).set_is_dead();
        }

        self.losers = losers;
        self.is_game_over = true;
    }

    /// Players whose head sits on a trail segment of either cycle
    fn struck_players(cast: &Cast) -> Vec<Player> {
        Player::ALL
            .into_iter()
            .filter(|&player| {
                let head = cast.cycle(player).head().position();
                cast.cycles().iter().any(|cycle| cycle.trail_contains(head))
            })
            .collect()
    }

    fn handle_game_over(&self, cast: &mut Cast) {
        cast.add_message(Banner::new(GAME_OVER_TEXT, self.center));
        info!(
            losers = ?self.losers,
            score = cast.score().points(),
            "round over"
        );
    }
}
