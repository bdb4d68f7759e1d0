//! Error types for the engine.
//!
//! Display strings are what the player sees.

use cv_core::{RoomNumber, WorldError};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Everything a command can refuse to do.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unknown verb, unknown object word, or too many words.
    #[error("Unavailable command")]
    UnknownCommand(String),

    /// No usable exit in that direction from the current room.
    #[error("Unavailable direction")]
    UnavailableDirection(String),

    /// `TAKE` of an object that is not in the room.
    #[error("You don't see any {0}")]
    ObjectNotPresent(String),

    /// `DROP` of an object the player does not carry.
    #[error("You don't have any {0} to drop")]
    ObjectNotCarried(String),

    /// `TAKE` without an object.
    #[error("There is nothing to take")]
    NothingToTake,

    /// `DROP` without an object.
    #[error("You don't have that object")]
    NothingToDrop,

    /// A chain of forced exits did not come to rest.
    #[error("You are caught in an endless passage (room {room}); the adventure cannot continue")]
    ForcedLoop {
        /// The room where the chain was cut off.
        room: RoomNumber,
    },

    /// World model error.
    #[error("{0}")]
    World(#[from] WorldError),
}
