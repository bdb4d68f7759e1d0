//! Single-file JSON form of an adventure.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cv_core::{GameObject, Room, SynonymTable, World};

use crate::error::{LoadError, LoadResult};

/// Serializable records of a whole adventure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    /// Room records, in ascending number order.
    pub rooms: Vec<Room>,
    /// Object records with their initial locations.
    #[serde(default)]
    pub objects: Vec<GameObject>,
    /// Input aliases.
    #[serde(default)]
    pub synonyms: SynonymTable,
}

impl Bundle {
    /// Captures the records of a freshly loaded world.
    pub fn from_world(world: &World, synonyms: &SynonymTable) -> Self {
        Self {
            rooms: world.rooms().cloned().collect(),
            objects: world.objects().into_iter().cloned().collect(),
            synonyms: synonyms.clone(),
        }
    }

    /// Decodes a bundle from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Encodes the bundle as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Builds the world described by the bundle.
    ///
    /// Directions, keys, object names, and synonyms are upper-cased the same
    /// way the text loaders do, so hand-written bundles may use any case.
    pub fn into_parts(self) -> LoadResult<(World, SynonymTable)> {
        let rooms = self.rooms.into_iter().map(normalize_room).collect();
        let objects = self
            .objects
            .into_iter()
            .map(|o| GameObject::new(o.name.trim(), o.description, o.initial_location.get()))
            .collect();
        let synonyms = self.synonyms.iter().collect();

        let world = World::new(rooms, objects)?;
        Ok((world, synonyms))
    }
}

fn normalize_room(mut room: Room) -> Room {
    for exit in &mut room.exits {
        exit.direction = exit.direction.trim().to_uppercase();
        if let Some(key) = exit.key.as_mut() {
            *key = key.trim().to_uppercase();
        }
    }
    room
}

/// Reads a bundle file.
pub fn read_bundle(path: &Path) -> LoadResult<Bundle> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Bundle::from_json(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
