use std::time::{Duration, Instant};

use crate::game::Player;

/// Results across the rounds of one session
pub struct MatchMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    pub wins: [u32; 2],
    pub draws: u32,
    pub best_score: u32,
}

impl MatchMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            wins: [0; 2],
            draws: 0,
            best_score: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Record a finished round; `winner` is `None` when both cycles crashed
    pub fn on_round_over(&mut self, winner: Option<Player>, final_score: u32) {
        self.rounds_played += 1;
        match winner {
            Some(player) => self.wins[player.index()] += 1,
            None => self.draws += 1,
        }
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn wins_for(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = MatchMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_round_results() {
        let mut metrics = MatchMetrics::new();

        metrics.on_round_over(Some(Player::One), 40);
        metrics.on_round_over(Some(Player::Two), 25);
        metrics.on_round_over(None, 60);
        metrics.on_round_over(Some(Player::One), 10);

        assert_eq!(metrics.rounds_played, 4);
        assert_eq!(metrics.wins_for(Player::One), 2);
        assert_eq!(metrics.wins_for(Player::Two), 1);
        assert_eq!(metrics.draws, 1);
        assert_eq!(metrics.best_score, 60);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = MatchMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
