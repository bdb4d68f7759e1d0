//! Configuration for a game session.

/// Tunable behaviour of a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Answer that confirms `QUIT`, compared after trimming and upper-casing.
    pub affirmative: String,
    /// Question asked after `QUIT`.
    pub quit_prompt: String,
    /// Prompt shown before each command.
    pub command_prompt: String,
    /// Longest run of forced exits followed before giving up.
    pub max_forced_chain: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            affirmative: "Y".to_string(),
            quit_prompt: "Confirm quit, your progress will not be saved (Y/N)? ".to_string(),
            command_prompt: "> ".to_string(),
            max_forced_chain: 64,
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer that confirms quitting.
    pub fn with_affirmative(mut self, token: impl Into<String>) -> Self {
        self.affirmative = token.into().trim().to_uppercase();
        self
    }

    /// Set the quit confirmation question.
    pub fn with_quit_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.quit_prompt = prompt.into();
        self
    }

    /// Set the command prompt.
    pub fn with_command_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.command_prompt = prompt.into();
        self
    }

    /// Set the forced-exit chain limit (at least 1).
    pub fn with_max_forced_chain(mut self, limit: usize) -> Self {
        self.max_forced_chain = limit.max(1);
        self
    }

    /// Whether `answer` confirms quitting.
    pub fn is_affirmative(&self, answer: &str) -> bool {
        answer.trim().to_uppercase() == self.affirmative
    }
}
