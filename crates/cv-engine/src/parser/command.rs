//! Command variants and argument resolution.

use cv_core::World;

use crate::error::{EngineError, EngineResult};
use crate::registry::CommandRegistry;
use crate::session::GameSession;

/// Verbs every adventure understands, in the order `HELP` lists them.
pub const BUILTIN_VERBS: &[&str] = &["DROP", "HELP", "INVENTORY", "LOOK", "TAKE", "QUIT"];

/// Something the player can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// Put a carried object down.
    Drop,
    /// List the built-in verbs.
    Help,
    /// List carried objects.
    Inventory,
    /// Describe the current room.
    Look,
    /// Pick an object up.
    Take,
    /// Ask to end the game.
    Quit,
    /// Move along an exit with this direction token.
    Motion(String),
}

impl CommandKind {
    /// The built-in command for `verb`, if it is one.
    pub fn builtin(verb: &str) -> Option<Self> {
        match verb {
            "DROP" => Some(Self::Drop),
            "HELP" => Some(Self::Help),
            "INVENTORY" => Some(Self::Inventory),
            "LOOK" => Some(Self::Look),
            "TAKE" => Some(Self::Take),
            "QUIT" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The verb that invokes this command.
    pub fn verb(&self) -> &str {
        match self {
            Self::Drop => "DROP",
            Self::Help => "HELP",
            Self::Inventory => "INVENTORY",
            Self::Look => "LOOK",
            Self::Take => "TAKE",
            Self::Quit => "QUIT",
            Self::Motion(direction) => direction.as_str(),
        }
    }

    /// Runs the command. Commands that take no object ignore `object`.
    pub fn execute(
        &self,
        session: &mut GameSession,
        object: Option<&str>,
    ) -> EngineResult<Vec<String>> {
        match self {
            Self::Drop => session.do_drop(object),
            Self::Help => Ok(session.do_help()),
            Self::Inventory => Ok(session.do_inventory()),
            Self::Look => session.do_look(),
            Self::Take => session.do_take(object),
            Self::Quit => Ok(session.do_quit()),
            Self::Motion(direction) => session.do_motion(direction),
        }
    }
}

/// A resolved command with its optional object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// What to do.
    pub command: CommandKind,
    /// Name of the object it applies to.
    pub object: Option<String>,
}

/// Resolves already-canonical tokens into an invocation.
///
/// One token invokes the verb alone; two tokens invoke it on the object named by
/// the second. An unknown verb, an unknown object word, or more than two tokens
/// is an [`EngineError::UnknownCommand`].
pub fn parse_invocation(
    tokens: &[String],
    registry: &CommandRegistry,
    world: &World,
) -> EngineResult<Invocation> {
    let unknown = || EngineError::UnknownCommand(tokens.join(" "));

    let verb = tokens.first().ok_or_else(unknown)?;
    let command = registry.resolve(verb).cloned().ok_or_else(unknown)?;

    match tokens {
        [_] => Ok(Invocation {
            command,
            object: None,
        }),
        [_, noun] if world.object(noun).is_some() => Ok(Invocation {
            command,
            object: Some(noun.clone()),
        }),
        _ => Err(unknown()),
    }
}
