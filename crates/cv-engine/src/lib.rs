//! Command resolution and navigation engine for Cavern.
//!
//! A [`GameSession`] owns one world and one player. Each line of input is split
//! into tokens, rewritten through the synonym table, matched against the
//! [`CommandRegistry`], and executed; movement goes through the
//! [`MotionResolver`], which also follows forced exits. The [`console`] module
//! drives a session over any reader/writer pair.

/// Engine configuration.
pub mod config;
/// Synchronous read-eval-print loop.
pub mod console;
mod describe;
/// Error types for the engine.
pub mod error;
/// Movement and forced-exit resolution.
pub mod motion;
/// Per-turn output and session status.
pub mod output;
/// Input tokenizing and command parsing.
pub mod parser;
/// Player state.
pub mod player;
/// Verb to command mapping.
pub mod registry;
/// Game session management.
pub mod session;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use motion::{Motion, MotionOutcome, MotionResolver};
pub use output::{EndReason, SessionStatus, Turn};
pub use parser::{BUILTIN_VERBS, CommandKind, Invocation, parse_invocation, tokenize};
pub use player::PlayerState;
pub use registry::CommandRegistry;
pub use session::GameSession;
