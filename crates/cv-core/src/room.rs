use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction token of an exit that is taken automatically on arrival.
pub const FORCED: &str = "FORCED";

/// Number identifying a room. Valid room numbers are greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// Returns the raw number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a room's exit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// The verb that takes this exit, e.g. `NORTH`, or [`FORCED`].
    pub direction: String,
    /// Where the exit leads. A number with no room ends the game.
    pub destination: RoomNumber,
    /// Object that must be carried for the exit to be usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Exit {
    /// Creates an unconditional exit.
    pub fn new(direction: impl Into<String>, destination: u32) -> Self {
        Self {
            direction: direction.into().to_uppercase(),
            destination: RoomNumber(destination),
            key: None,
        }
    }

    /// Requires `key` to be carried before the exit can be used.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into().to_uppercase());
        self
    }

    /// Whether this is the automatic `FORCED` exit.
    pub fn is_forced(&self) -> bool {
        self.direction == FORCED
    }
}

/// A numbered location in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number.
    pub number: RoomNumber,
    /// One-line name, shown on return visits.
    pub name: String,
    /// Long description, shown on the first visit and by `LOOK`.
    pub description: Vec<String>,
    /// Exit table, in declared order.
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(skip)]
    visited: bool,
}

impl Room {
    /// Creates an unvisited room with no description and no exits.
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number: RoomNumber(number),
            name: name.into(),
            description: Vec::new(),
            exits: Vec::new(),
            visited: false,
        }
    }

    /// Appends a line to the long description.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    /// Appends an exit to the exit table.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    /// The exit table in declared order.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// The first entry of the exit table if it is a forced exit.
    pub fn forced_exit(&self) -> Option<&Exit> {
        self.exits.first().filter(|e| e.is_forced())
    }

    /// Whether the player has stopped in this room before.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
