use std::collections::HashMap;

use crate::room::RoomNumber;

/// The one place an object can be at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Lying in a room.
    Room(RoomNumber),
    /// Carried by the player.
    Inventory,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    container: Container,
    seq: u64,
}

/// Ledger mapping each object name to its single container.
///
/// Every placement carries a sequence number so that listing a container yields
/// objects in the order they arrived there.
#[derive(Debug, Clone, Default)]
pub struct Placements {
    entries: HashMap<String, Placement>,
    next_seq: u64,
}

impl Placements {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `object` into `container`, removing it from wherever it was.
    pub fn place(&mut self, object: impl Into<String>, container: Container) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(object.into(), Placement { container, seq });
    }

    /// The container currently holding `object`.
    pub fn container_of(&self, object: &str) -> Option<Container> {
        self.entries.get(object).map(|p| p.container)
    }

    /// Whether `object` is in `container`.
    pub fn is_in(&self, object: &str, container: Container) -> bool {
        self.container_of(object) == Some(container)
    }

    /// Names of the objects in `container`, in arrival order.
    pub fn contents(&self, container: Container) -> Vec<&str> {
        let mut found: Vec<(&str, u64)> = self
            .entries
            .iter()
            .filter(|(_, p)| p.container == container)
            .map(|(name, p)| (name.as_str(), p.seq))
            .collect();
        found.sort_by_key(|(_, seq)| *seq);
        found.into_iter().map(|(name, _)| name).collect()
    }

    /// Number of objects tracked by the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger tracks no objects.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
