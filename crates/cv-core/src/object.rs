use serde::{Deserialize, Serialize};

use crate::room::RoomNumber;

/// A portable object.
///
/// The object's *current* location is not stored here; see
/// [`Placements`](crate::placement::Placements).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    /// The word used to refer to the object, e.g. `KEYS`.
    pub name: String,
    /// Short description starting with an article, e.g. "a set of keys".
    pub description: String,
    /// Room the object starts in.
    pub initial_location: RoomNumber,
}

impl GameObject {
    /// Creates an object starting in room `initial_location`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, initial_location: u32) -> Self {
        Self {
            name: name.into().to_uppercase(),
            description: description.into(),
            initial_location: RoomNumber(initial_location),
        }
    }
}
