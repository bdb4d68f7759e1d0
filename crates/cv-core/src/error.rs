use crate::room::RoomNumber;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when assembling or manipulating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A world needs at least one room to start in.
    #[error("world has no rooms")]
    NoRooms,

    /// Room numbers must be greater than zero.
    #[error("invalid room number: {0}")]
    InvalidRoomNumber(u32),

    /// Two rooms share the same number.
    #[error("duplicate room number: {0}")]
    DuplicateRoom(RoomNumber),

    /// An object was declared without a name.
    #[error("object with empty name (description: \"{0}\")")]
    EmptyObjectName(String),

    /// Two objects share the same name.
    #[error("duplicate object name: \"{0}\"")]
    DuplicateObject(String),

    /// An object starts in a room that does not exist.
    #[error("object \"{object}\" starts in unknown room {room}")]
    UnknownLocation {
        /// The misplaced object.
        object: String,
        /// The room number that could not be resolved.
        room: RoomNumber,
    },

    /// A room number passed to the world does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(RoomNumber),

    /// The requested object name does not exist in the world.
    #[error("object not found: \"{0}\"")]
    ObjectNotFound(String),
}
