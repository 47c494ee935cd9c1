use serde::Serialize;
use std::time::{Duration, Instant};

/// Statistics kept across restarts for the lifetime of the program
#[derive(Debug, Clone, Serialize)]
pub struct SessionMetrics {
    #[serde(skip)]
    pub game_started: Instant,
    /// Time spent in the current game, frozen at game over
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub apples_eaten: u32,
    #[serde(skip)]
    running: bool,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            apples_eaten: 0,
            running: true,
        }
    }

    /// Refresh the game clock; no-op once the game has ended
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.game_started.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_apple(&mut self) {
        self.apples_eaten += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = SessionMetrics::new();

        metrics.on_game_over(30);
        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_start();
        metrics.on_game_over(60);
        assert_eq!(metrics.high_score, 60);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_freezes_at_game_over() {
        let mut metrics = SessionMetrics::new();
        metrics.on_game_over(0);
        metrics.elapsed_time = Duration::from_secs(90);

        metrics.update();
        assert_eq!(metrics.format_time(), "01:30");

        metrics.on_game_start();
        metrics.update();
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_apples_survive_restarts() {
        let mut metrics = SessionMetrics::new();
        metrics.on_apple();
        metrics.on_game_over(10);
        metrics.on_game_start();
        metrics.on_apple();
        assert_eq!(metrics.apples_eaten, 2);
    }
}
