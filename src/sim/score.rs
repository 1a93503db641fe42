//! Run score and best-ever score

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Pipes passed this run
    pub value: u32,
    /// Best value ever reached (survives restarts, persisted externally)
    pub best: u32,
}

impl Score {
    pub fn with_best(best: u32) -> Self {
        Self { value: 0, best }
    }

    /// Count one passed pipe; returns the best score to persist
    pub fn register_pass(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.best = self.best.max(self.value);
        self.best
    }

    /// Start a new run
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_pass_tracks_best() {
        let mut score = Score::with_best(2);
        assert_eq!(score.register_pass(), 2);
        assert_eq!(score.register_pass(), 2);
        assert_eq!(score.register_pass(), 3);
        assert_eq!(score.value, 3);
        assert_eq!(score.best, 3);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut score = Score::default();
        score.register_pass();
        score.register_pass();
        score.reset();
        assert_eq!(score.value, 0);
        assert_eq!(score.best, 2);
    }
}
