//! Verb to command mapping.

use std::collections::HashMap;

use cv_core::{FORCED, World};

use crate::parser::{BUILTIN_VERBS, CommandKind};

/// Maps canonical verbs to commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandKind>,
}

impl CommandRegistry {
    /// A registry with only the built-in verbs.
    pub fn builtins() -> Self {
        let commands = BUILTIN_VERBS
            .iter()
            .filter_map(|verb| CommandKind::builtin(verb).map(|c| (verb.to_string(), c)))
            .collect();
        Self { commands }
    }

    /// The built-in verbs plus one motion verb per direction used in `world`.
    pub fn for_world(world: &World) -> Self {
        let mut registry = Self::builtins();
        for direction in world.directions() {
            registry.register_direction(direction);
        }
        registry
    }

    /// Adds a motion verb. Returns false if the token is the forced-exit sentinel
    /// or already names a command.
    pub fn register_direction(&mut self, direction: &str) -> bool {
        let direction = direction.to_uppercase();
        if direction == FORCED {
            return false;
        }
        if let Some(existing) = self.commands.get(&direction) {
            if !matches!(existing, CommandKind::Motion(_)) {
                tracing::warn!(
                    direction = %direction,
                    command = existing.verb(),
                    "exit direction shadows a built-in verb and will not be reachable"
                );
            }
            return false;
        }
        self.commands
            .insert(direction.clone(), CommandKind::Motion(direction));
        true
    }

    /// The command for a canonical verb.
    pub fn resolve(&self, verb: &str) -> Option<&CommandKind> {
        self.commands.get(verb)
    }

    /// Motion verbs, sorted.
    pub fn directions(&self) -> Vec<&str> {
        let mut dirs: Vec<&str> = self
            .commands
            .values()
            .filter_map(|c| match c {
                CommandKind::Motion(d) => Some(d.as_str()),
                _ => None,
            })
            .collect();
        dirs.sort_unstable();
        dirs
    }

    /// Number of registered verbs.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no verbs are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
