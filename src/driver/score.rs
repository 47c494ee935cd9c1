use std::cell::Cell;
use std::rc::Rc;

/// Write-only target for the current score
pub trait ScoreSink {
    fn set_score(&mut self, score: u32);
}

/// Score display shared between the game loop and whatever shows it.
///
/// Clones share the same value. Single-threaded by construction: the game
/// loop and the display run on the same task.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard(Rc<Cell<u32>>);

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl ScoreSink for ScoreBoard {
    fn set_score(&mut self, score: u32) {
        self.0.set(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_score() {
        let board = ScoreBoard::new();
        let mut writer = board.clone();
        assert_eq!(board.get(), 0);

        writer.set_score(30);
        assert_eq!(board.get(), 30);
    }
}
