/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player confirmed `QUIT`.
    Quit,
    /// The player moved into a room that does not exist.
    TerminalRoom,
    /// Forced exits kept leading on past the configured limit.
    ForcedLoop,
    /// The input stream ended.
    InputClosed,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for a command.
    Running,
    /// Waiting for the answer to the quit question.
    Confirming,
    /// Over; further input is ignored.
    Ended(EndReason),
}

impl SessionStatus {
    /// Whether the session still accepts input.
    pub fn is_running(&self) -> bool {
        !matches!(self, Self::Ended(_))
    }
}

/// Everything one turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Lines of text to show, in order.
    pub lines: Vec<String>,
    /// Text to show before reading the next line, if any is to be read.
    pub prompt: Option<String>,
    /// Session status after the turn.
    pub status: SessionStatus,
}

impl Turn {
    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
