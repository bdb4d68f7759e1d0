//! Player state management.

use cv_core::RoomNumber;

/// The player's position and whether the game goes on.
///
/// Carried objects live in the world's placement ledger under
/// [`Container::Inventory`](cv_core::Container::Inventory), so an object can
/// never be both carried and lying in a room.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The room the player is in.
    pub current_room: RoomNumber,
    /// Cleared when the game ends.
    pub running: bool,
    /// Commands executed so far.
    pub turns: u64,
}

impl PlayerState {
    /// Create a player standing in `start`.
    pub fn new(start: RoomNumber) -> Self {
        Self {
            current_room: start,
            running: true,
            turns: 0,
        }
    }

    /// Whether the game is still going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the game.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
