//! World-data loaders for Cavern adventures.
//!
//! An adventure called `Crowther` is stored as up to three text files next to
//! each other: `CrowtherRooms.txt` (required), `CrowtherObjects.txt` and
//! `CrowtherSynonyms.txt` (both optional). The same data can also be kept in a
//! single JSON [`Bundle`].

/// Single-file JSON adventures.
pub mod bundle;
mod cursor;
/// Parse errors and their terminal rendering.
pub mod diagnostics;
/// Error types for loading.
pub mod error;
/// Object file parser.
pub mod objects;
/// Room file parser.
pub mod rooms;
/// Synonym file parser.
pub mod synonyms;

use std::fs;
use std::path::{Path, PathBuf};

use cv_core::{SynonymTable, World};

pub use bundle::{Bundle, read_bundle};
pub use diagnostics::ParseError;
pub use error::{LoadError, LoadResult};
pub use objects::parse_objects;
pub use rooms::parse_rooms;
pub use synonyms::parse_synonyms;

/// A loaded adventure, ready to be played.
#[derive(Debug, Clone)]
pub struct Adventure {
    /// The adventure's name, e.g. `Crowther`.
    pub name: String,
    /// The world in its initial state.
    pub world: World,
    /// Input aliases.
    pub synonyms: SynonymTable,
}

/// Paths of the text files making up an adventure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventureFiles {
    /// `<Name>Rooms.txt`.
    pub rooms: PathBuf,
    /// `<Name>Objects.txt`.
    pub objects: PathBuf,
    /// `<Name>Synonyms.txt`.
    pub synonyms: PathBuf,
}

impl AdventureFiles {
    /// The files for adventure `name` in `dir`.
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            rooms: dir.join(format!("{name}Rooms.txt")),
            objects: dir.join(format!("{name}Objects.txt")),
            synonyms: dir.join(format!("{name}Synonyms.txt")),
        }
    }
}

/// Loads an adventure from `dir`.
///
/// A `name` ending in `.json` is read as a [`Bundle`]; anything else names the
/// text files of [`AdventureFiles`].
pub fn load(dir: &Path, name: &str) -> LoadResult<Adventure> {
    if name.ends_with(".json") {
        let path = dir.join(name);
        let (world, synonyms) = read_bundle(&path)?.into_parts()?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        tracing::debug!(
            bundle = %path.display(),
            rooms = world.room_count(),
            objects = world.object_count(),
            "loaded bundle"
        );
        return Ok(Adventure {
            name: stem,
            world,
            synonyms,
        });
    }
    load_adventure(dir, name)
}

/// Loads the text files of adventure `name` from `dir`.
pub fn load_adventure(dir: &Path, name: &str) -> LoadResult<Adventure> {
    let files = AdventureFiles::new(dir, name);

    let rooms = read_required(&files.rooms)?;
    let objects = read_optional(&files.objects)?;
    let synonyms = read_optional(&files.synonyms)?;

    let adventure = load_sources(
        name,
        Source::new(&files.rooms, &rooms),
        objects.as_deref().map(|text| Source::new(&files.objects, text)),
        synonyms.as_deref().map(|text| Source::new(&files.synonyms, text)),
    )?;

    tracing::debug!(
        adventure = name,
        rooms = adventure.world.room_count(),
        objects = adventure.world.object_count(),
        synonyms = adventure.synonyms.len(),
        "loaded adventure"
    );
    Ok(adventure)
}

/// Text of one data file together with the name used in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// File name shown in diagnostics.
    pub file: &'a str,
    /// File contents.
    pub text: &'a str,
}

impl<'a> Source<'a> {
    /// Pairs a path's file name with its contents.
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        let file = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("<adventure>");
        Self { file, text }
    }

    /// A source with an explicit name, for in-memory data.
    pub fn named(file: &'a str, text: &'a str) -> Self {
        Self { file, text }
    }
}

/// Builds an adventure from already-read file contents.
pub fn load_sources(
    name: &str,
    rooms: Source<'_>,
    objects: Option<Source<'_>>,
    synonyms: Option<Source<'_>>,
) -> LoadResult<Adventure> {
    let rooms = parse_rooms(rooms.file, rooms.text).map_err(|error| parse_error(error, rooms))?;

    let objects = match objects {
        Some(src) => parse_objects(src.file, src.text).map_err(|error| parse_error(error, src))?,
        None => Vec::new(),
    };

    let synonyms = match synonyms {
        Some(src) => {
            parse_synonyms(src.file, src.text).map_err(|error| parse_error(error, src))?
        }
        None => SynonymTable::new(),
    };

    let world = World::new(rooms, objects)?;
    Ok(Adventure {
        name: name.to_string(),
        world,
        synonyms,
    })
}

fn parse_error(error: ParseError, source: Source<'_>) -> LoadError {
    LoadError::Parse {
        error,
        text: source.text.to_string(),
    }
}

fn read_required(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> LoadResult<Option<String>> {
    if !path.exists() {
        tracing::debug!(file = %path.display(), "optional file not present");
        return Ok(None);
    }
    read_required(path).map(Some)
}
