use super::action::Player;
use super::actor::Banner;
use super::config::GameConfig;
use super::cycle::Cycle;
use super::score::Score;

/// Everything on the field during a round, grouped by role
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    cycles: [Cycle; 2],
    score: Score,
    messages: Vec<Banner>,
}

impl Cast {
    pub fn new(cycles: [Cycle; 2], score: Score) -> Self {
        Self {
            cycles,
            score,
            messages: Vec::new(),
        }
    }

    /// Place both cycles at their configured start positions
    pub fn from_config(config: &GameConfig) -> Self {
        let cycles = Player::ALL.map(|player| {
            let i = player.index();
            Cycle::new(config.player_starts[i], config.player_colors[i], config)
        });
        Self::new(cycles, Score::new())
    }

    pub fn first_cycle(&self) -> &Cycle {
        &self.cycles[0]
    }

    pub fn second_cycle(&self) -> &Cycle {
        &self.cycles[1]
    }

    pub fn cycle(&self, player: Player) -> &Cycle {
        &self.cycles[player.index()]
    }

    pub fn cycle_mut(&mut self, player: Player) -> &mut Cycle {
        &mut self.cycles[player.index()]
    }

    pub fn cycles(&self) -> &[Cycle; 2] {
        &self.cycles
    }

    pub fn cycles_mut(&mut self) -> &mut [Cycle; 2] {
        &mut self.cycles
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn add_message(&mut self, message: Banner) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Banner] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actor::{Actor, Color};
    use crate::game::point::Point;

    #[test]
    fn test_cast_from_config() {
        let config = GameConfig::default();
        let cast = Cast::from_config(&config);

        assert_eq!(cast.first_cycle().head().position(), Point::new(300, 195));
        assert_eq!(cast.second_cycle().head().position(), Point::new(300, 405));
        assert_eq!(cast.cycle(Player::One).color(), Color::RED);
        assert_eq!(cast.cycle(Player::Two).color(), Color::GREEN);
        assert_eq!(cast.first_cycle().len(), config.initial_cycle_length);
        assert_eq!(cast.score().points(), 0);
        assert!(cast.messages().is_empty());
    }

    #[test]
    fn test_add_message() {
        let mut cast = Cast::from_config(&GameConfig::default());
        cast.add_message(Banner::new("hi", Point::new(1, 1)));
        assert_eq!(cast.messages().len(), 1);
        assert_eq!(cast.messages()[0].text(), "hi");
    }
}
