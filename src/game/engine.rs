use tracing::{debug, info};

use super::{
    action::{Direction, Player, Turn},
    cast::Cast,
    collision::{CollisionResolver, RoundStatus},
    config::GameConfig,
};

/// One round of play: the cast plus the rules that end it.
///
/// A tick applies queued turns, moves both cycles and then resolves
/// collisions, in that order.
pub struct Round {
    config: GameConfig,
    cast: Cast,
    resolver: CollisionResolver,
    pending: [Option<Direction>; 2],
    ticks: u32,
}

impl Round {
    /// Set up a fresh round with both cycles at their start positions
    pub fn new(config: GameConfig) -> Self {
        let cast = Cast::from_config(&config);
        let resolver = CollisionResolver::new(&config);
        info!(
            max_x = config.max_x,
            max_y = config.max_y,
            policy = ?config.death_policy,
            "round started"
        );

        Self {
            config,
            cast,
            resolver,
            pending: [None; 2],
            ticks: 0,
        }
    }

    /// Remember a turn to apply at the start of the next tick. A later turn
    /// for the same player in the same tick replaces an earlier one.
    pub fn queue_turn(&mut self, turn: Turn) {
        self.pending[turn.player.index()] = Some(turn.direction);
    }

    /// Execute one tick of the round
    pub fn tick(&mut self) -> RoundStatus {
        if self.resolver.is_game_over() {
            return self.resolver.status();
        }

        for player in Player::ALL {
            if let Some(direction) = self.pending[player.index()].take() {
                debug!(?player, ?direction, "turning");
                let velocity = direction.velocity(self.config.cell_size);
                self.cast.cycle_mut(player).turn_head(velocity);
            }
        }

        for cycle in self.cast.cycles_mut() {
            cycle.move_next();
        }

        self.ticks += 1;
        self.resolver.execute(&mut self.cast)
    }

    pub fn status(&self) -> RoundStatus {
        self.resolver.status()
    }

    pub fn is_over(&self) -> bool {
        self.resolver.is_game_over()
    }

    /// The only surviving player once the round is over
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        let mut alive = Player::ALL
            .into_iter()
            .filter(|&p| !self.cast.cycle(p).is_dead());
        match (alive.next(), alive.next()) {
            (Some(player), None) => Some(player),
            _ => None,
        }
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
