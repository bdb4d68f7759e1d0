//! Core types for Cavern: rooms, exits, objects, and the world model.
//!
//! This crate defines the data the loaders produce and the engine plays on. It
//! knows nothing about file formats or player input; a [`World`] can be built
//! programmatically from [`Room`] and [`GameObject`] records.

/// Error types used throughout the crate.
pub mod error;
/// Objects that can be carried between rooms.
pub mod object;
/// The ledger recording which container holds each object.
pub mod placement;
/// Rooms, room numbers, and exit tables.
pub mod room;
/// Input aliases rewritten to canonical tokens.
pub mod synonym;
/// The world model that owns rooms, objects, and placements.
pub mod world;

/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export object types.
pub use object::GameObject;
/// Re-export placement types.
pub use placement::{Container, Placements};
/// Re-export room types.
pub use room::{Exit, FORCED, Room, RoomNumber};
/// Re-export the synonym table.
pub use synonym::SynonymTable;
/// Re-export the world model.
pub use world::World;
