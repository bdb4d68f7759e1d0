//! Input tokenizing and command parsing.

mod command;
mod tokens;

pub use command::{BUILTIN_VERBS, CommandKind, Invocation, parse_invocation};
pub use tokens::tokenize;
