//! Configuration for a game session.

/// Tunable rules of a session. The defaults are the shipped game.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// Back-moves the Murderer may make while the victim is alive.
    pub escape_attempts: u32,
    /// Clues the Detective needs before an arrest is allowed.
    pub arrest_threshold: usize,
    /// Code that opens the safe in the couple's room.
    pub safe_code: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            escape_attempts: 3,
            arrest_threshold: 4,
            safe_code: "2204".to_string(),
        }
    }
}

impl StoryConfig {
    /// Set the number of back-moves before the Murderer is caught.
    pub fn with_escape_attempts(mut self, attempts: u32) -> Self {
        self.escape_attempts = attempts;
        self
    }

    /// Set the number of clues needed for an arrest (at least 1).
    pub fn with_arrest_threshold(mut self, clues: usize) -> Self {
        self.arrest_threshold = clues.max(1);
        self
    }

    /// Set the safe code.
    pub fn with_safe_code(mut self, code: impl Into<String>) -> Self {
        self.safe_code = code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoryConfig::default();
        assert_eq!(cfg.escape_attempts, 3);
        assert_eq!(cfg.arrest_threshold, 4);
        assert_eq!(cfg.safe_code, "2204");
    }

    #[test]
    fn builder_methods() {
        let cfg = StoryConfig::default()
            .with_escape_attempts(1)
            .with_arrest_threshold(2)
            .with_safe_code("1234");
        assert_eq!(cfg.escape_attempts, 1);
        assert_eq!(cfg.arrest_threshold, 2);
        assert_eq!(cfg.safe_code, "1234");
    }

    #[test]
    fn arrest_threshold_clamped() {
        let cfg = StoryConfig::default().with_arrest_threshold(0);
        assert_eq!(cfg.arrest_threshold, 1);
    }
}
