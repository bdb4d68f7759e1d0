//! Game session management.

use cv_core::{Container, Room, SynonymTable, World, WorldError};

use crate::config::EngineConfig;
use crate::describe::{inventory_listing, room_description};
use crate::error::{EngineError, EngineResult};
use crate::motion::{MotionOutcome, MotionResolver};
use crate::output::{EndReason, SessionStatus, Turn};
use crate::parser::{BUILTIN_VERBS, Invocation, parse_invocation, tokenize};
use crate::player::PlayerState;
use crate::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    NotStarted,
    Playing,
    ConfirmingQuit,
    Ended(EndReason),
}

/// One playthrough of an adventure.
///
/// The session owns its world, so room visits and object moves made here are
/// never seen by another session.
pub struct GameSession {
    world: World,
    player: PlayerState,
    synonyms: SynonymTable,
    registry: CommandRegistry,
    config: EngineConfig,
    mode: Mode,
}

impl GameSession {
    /// Create a session with the player in the lowest-numbered room.
    pub fn new(world: World, synonyms: SynonymTable, config: EngineConfig) -> Self {
        let registry = CommandRegistry::for_world(&world);
        let player = PlayerState::new(world.first_room().number);
        tracing::debug!(
            rooms = world.room_count(),
            objects = world.object_count(),
            verbs = registry.len(),
            "session created"
        );
        Self {
            world,
            player,
            synonyms,
            registry,
            config,
            mode: Mode::NotStarted,
        }
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the verb registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Get the synonym table.
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.world.room(self.player.current_room)
    }

    /// Where the session is in its lifecycle.
    pub fn status(&self) -> SessionStatus {
        match self.mode {
            Mode::NotStarted | Mode::Playing => SessionStatus::Running,
            Mode::ConfirmingQuit => SessionStatus::Confirming,
            Mode::Ended(reason) => SessionStatus::Ended(reason),
        }
    }

    /// Whether the session still accepts input.
    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Why the session ended, once it has.
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.mode {
            Mode::Ended(reason) => Some(reason),
            _ => None,
        }
    }

    /// The prompt to show before reading the next line, if any.
    pub fn prompt(&self) -> Option<&str> {
        match self.mode {
            Mode::NotStarted | Mode::Playing => Some(&self.config.command_prompt),
            Mode::ConfirmingQuit => Some(&self.config.quit_prompt),
            Mode::Ended(_) => None,
        }
    }

    /// Describes the starting room and marks it visited.
    ///
    /// Does nothing once the session has started.
    pub fn start(&mut self) -> Turn {
        if self.mode != Mode::NotStarted {
            return self.turn(Vec::new());
        }

        let start = self.world.first_room();
        let number = start.number;
        let lines = room_description(&self.world, start);
        if let Err(err) = self.world.set_visited(number, true) {
            tracing::error!(%err, "cannot mark the starting room visited");
        }
        self.player = PlayerState::new(number);
        self.mode = Mode::Playing;
        tracing::info!(room = %number, "adventure started");
        self.turn(lines)
    }

    /// Feeds one line of input to the session.
    ///
    /// Starts the session first if needed. While the quit question is open the
    /// line is taken as its answer; otherwise it is run as a command, and any
    /// error becomes a line of output. Blank lines do nothing.
    pub fn step(&mut self, input: &str) -> Turn {
        let mut lines = match self.mode {
            Mode::NotStarted => self.start().lines,
            _ => Vec::new(),
        };

        match self.mode {
            Mode::Ended(_) => {
                tracing::debug!(input, "input after the game ended is ignored");
            }
            Mode::ConfirmingQuit => {
                if self.config.is_affirmative(input) {
                    self.end(EndReason::Quit);
                } else {
                    tracing::debug!("quit cancelled");
                    self.mode = Mode::Playing;
                }
            }
            Mode::NotStarted | Mode::Playing => {
                if !input.trim().is_empty() {
                    self.player.turns += 1;
                    match self.process(input) {
                        Ok(output) => lines.extend(output),
                        Err(err) => {
                            tracing::debug!(%err, input, "command failed");
                            lines.push(err.to_string());
                        }
                    }
                }
            }
        }

        self.turn(lines)
    }

    /// Ends the session because no more input will come.
    pub fn close_input(&mut self) -> Turn {
        if self.is_running() {
            self.end(EndReason::InputClosed);
        }
        self.turn(Vec::new())
    }

    /// Tokenizes, resolves, and executes one line of input.
    pub fn process(&mut self, input: &str) -> EngineResult<Vec<String>> {
        let tokens = tokenize(input, &self.synonyms);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let invocation = parse_invocation(&tokens, &self.registry, &self.world)?;
        self.execute(&invocation)
    }

    /// Execute a resolved command.
    pub fn execute(&mut self, invocation: &Invocation) -> EngineResult<Vec<String>> {
        tracing::debug!(
            verb = invocation.command.verb(),
            object = invocation.object.as_deref(),
            "executing"
        );
        invocation
            .command
            .execute(self, invocation.object.as_deref())
    }

    fn turn(&self, lines: Vec<String>) -> Turn {
        Turn {
            lines,
            prompt: self.prompt().map(str::to_string),
            status: self.status(),
        }
    }

    fn end(&mut self, reason: EndReason) {
        tracing::info!(?reason, turns = self.player.turns, "adventure over");
        self.player.stop();
        self.mode = Mode::Ended(reason);
    }

    pub(crate) fn do_take(&mut self, object: Option<&str>) -> EngineResult<Vec<String>> {
        let name = object.ok_or(EngineError::NothingToTake)?;
        let here = Container::Room(self.player.current_room);
        if !self.world.placements().is_in(name, here) {
            return Err(EngineError::ObjectNotPresent(name.to_string()));
        }
        self.world.move_object(name, Container::Inventory)?;
        Ok(vec!["Taken".to_string()])
    }

    pub(crate) fn do_drop(&mut self, object: Option<&str>) -> EngineResult<Vec<String>> {
        let name = object.ok_or(EngineError::NothingToDrop)?;
        if !self.world.is_carried(name) {
            return Err(EngineError::ObjectNotCarried(name.to_string()));
        }
        self.world
            .move_object(name, Container::Room(self.player.current_room))?;
        Ok(vec!["Dropped".to_string()])
    }

    pub(crate) fn do_look(&self) -> EngineResult<Vec<String>> {
        let here = self.player.current_room;
        let room = self.world.room(here).ok_or(WorldError::RoomNotFound(here))?;
        Ok(room_description(&self.world, room))
    }

    pub(crate) fn do_inventory(&self) -> Vec<String> {
        let listing = inventory_listing(&self.world);
        if listing.is_empty() {
            vec!["Your inventory is empty".to_string()]
        } else {
            listing
        }
    }

    pub(crate) fn do_help(&self) -> Vec<String> {
        std::iter::once("List of all possible commands:")
            .chain(BUILTIN_VERBS.iter().copied())
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn do_quit(&mut self) -> Vec<String> {
        self.mode = Mode::ConfirmingQuit;
        Vec::new()
    }

    pub(crate) fn do_motion(&mut self, direction: &str) -> EngineResult<Vec<String>> {
        let limit = self.config.max_forced_chain;
        let motion = MotionResolver::new(&mut self.world, &mut self.player, limit).travel(direction)?;
        let mut lines = motion.lines;
        match motion.outcome {
            MotionOutcome::Terminal(_) => self.end(EndReason::TerminalRoom),
            MotionOutcome::ForcedLoop(room) => {
                lines.push(EngineError::ForcedLoop { room }.to_string());
                self.end(EndReason::ForcedLoop);
            }
            MotionOutcome::Arrived(_) | MotionOutcome::Stalled(_) => {}
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::{Exit, GameObject};

    fn test_world() -> World {
        World::new(
            vec![
                Room::new(1, "Outside building")
                    .with_line("You are standing at the end of a road.")
                    .with_exit(Exit::new("NORTH", 2))
                    .with_exit(Exit::new("IN", 3).with_key("KEYS")),
                Room::new(2, "Hill")
                    .with_line("You are on a hill.")
                    .with_exit(Exit::new("SOUTH", 1))
                    .with_exit(Exit::new("JUMP", 0)),
                Room::new(3, "Inside building")
                    .with_line("You are inside a building.")
                    .with_exit(Exit::new("OUT", 1)),
            ],
            vec![
                GameObject::new("KEYS", "a set of keys", 1),
                GameObject::new("LAMP", "a brass lamp", 2),
            ],
        )
        .unwrap()
    }

    fn session() -> GameSession {
        let synonyms = SynonymTable::new().with("N", "NORTH").with("S", "SOUTH");
        let mut session = GameSession::new(test_world(), synonyms, EngineConfig::default());
        session.start();
        session
    }

    #[test]
    fn start_describes_first_room() {
        let mut session = GameSession::new(
            test_world(),
            SynonymTable::new(),
            EngineConfig::default(),
        );
        let turn = session.start();
        assert_eq!(
            turn.lines,
            vec![
                "You are standing at the end of a road.",
                "There is a set of keys here",
            ]
        );
        assert_eq!(turn.prompt.as_deref(), Some("> "));
        assert_eq!(turn.status, SessionStatus::Running);
        assert!(session.world().room(cv_core::RoomNumber(1)).unwrap().is_visited());

        assert!(session.start().lines.is_empty());
    }

    #[test]
    fn first_step_starts_session() {
        let mut session = GameSession::new(
            test_world(),
            SynonymTable::new(),
            EngineConfig::default(),
        );
        let turn = session.step("INVENTORY");
        assert_eq!(
            turn.lines,
            vec![
                "You are standing at the end of a road.",
                "There is a set of keys here",
                "Your inventory is empty",
            ]
        );
    }

    #[test]
    fn take_and_drop() {
        let mut session = session();
        assert_eq!(session.step("take keys").lines, vec!["Taken"]);
        assert!(session.world().is_carried("KEYS"));
        assert_eq!(
            session.step("inventory").lines,
            vec!["KEYS: a set of keys"]
        );
        assert_eq!(
            session.step("take keys").lines,
            vec!["You don't see any KEYS"]
        );

        session.step("n");
        assert_eq!(session.step("drop keys").lines, vec!["Dropped"]);
        assert_eq!(
            session.world().container_of("KEYS"),
            Some(Container::Room(cv_core::RoomNumber(2)))
        );
        assert_eq!(
            session.step("drop keys").lines,
            vec!["You don't have any KEYS to drop"]
        );
    }

    #[test]
    fn take_and_drop_need_an_object() {
        let mut session = session();
        assert_eq!(session.step("take").lines, vec!["There is nothing to take"]);
        assert_eq!(session.step("drop").lines, vec!["You don't have that object"]);
    }

    #[test]
    fn take_object_in_another_room() {
        let mut session = session();
        assert_eq!(
            session.step("take lamp").lines,
            vec!["You don't see any LAMP"]
        );
    }

    #[test]
    fn unknown_input() {
        let mut session = session();
        assert_eq!(session.step("dance").lines, vec!["Unavailable command"]);
        assert_eq!(session.step("take sword").lines, vec!["Unavailable command"]);
        assert_eq!(
            session.step("take keys now").lines,
            vec!["Unavailable command"]
        );
        assert!(session.step("   ").lines.is_empty());
    }

    #[test]
    fn synonyms_and_revisits() {
        let mut session = session();
        assert_eq!(
            session.step("N").lines,
            vec!["You are on a hill.", "There is a brass lamp here"]
        );
        assert_eq!(session.step("s").lines, vec!["Outside building"]);
        assert_eq!(session.step("look").lines[0], "You are standing at the end of a road.");
    }

    #[test]
    fn locked_exit_is_unavailable() {
        let mut session = session();
        assert_eq!(session.step("in").lines, vec!["Unavailable direction"]);
        session.step("take keys");
        assert_eq!(
            session.step("in").lines,
            vec!["You are inside a building."]
        );
        assert_eq!(session.player().current_room, cv_core::RoomNumber(3));
    }

    #[test]
    fn object_argument_ignored_by_plain_verbs() {
        let mut session = session();
        let turn = session.step("look keys");
        assert_eq!(turn.lines[0], "You are standing at the end of a road.");
    }

    #[test]
    fn quit_asks_first() {
        let mut session = session();
        let turn = session.step("quit");
        assert!(turn.lines.is_empty());
        assert_eq!(turn.status, SessionStatus::Confirming);
        assert_eq!(
            turn.prompt.as_deref(),
            Some("Confirm quit, your progress will not be saved (Y/N)? ")
        );

        let turn = session.step("n");
        assert_eq!(turn.status, SessionStatus::Running);

        session.step("quit");
        let turn = session.step(" y ");
        assert_eq!(turn.status, SessionStatus::Ended(EndReason::Quit));
        assert_eq!(turn.prompt, None);
        assert!(!session.player().is_running());
    }

    #[test]
    fn answer_is_not_run_as_command() {
        let mut session = session();
        session.step("quit");
        let turn = session.step("take keys");
        assert!(turn.lines.is_empty());
        assert!(!session.world().is_carried("KEYS"));
        assert_eq!(turn.status, SessionStatus::Running);
    }

    #[test]
    fn custom_affirmative() {
        let config = EngineConfig::default().with_affirmative("yes");
        let mut session = GameSession::new(test_world(), SynonymTable::new(), config);
        session.start();
        session.step("quit");
        assert_eq!(session.step("y").status, SessionStatus::Running);
        session.step("quit");
        assert_eq!(
            session.step("Yes").status,
            SessionStatus::Ended(EndReason::Quit)
        );
    }

    #[test]
    fn terminal_room_ends_game() {
        let mut session = session();
        session.step("north");
        let turn = session.step("jump");
        assert!(turn.lines.is_empty());
        assert_eq!(turn.status, SessionStatus::Ended(EndReason::TerminalRoom));
        assert_eq!(session.end_reason(), Some(EndReason::TerminalRoom));

        assert!(session.step("look").lines.is_empty());
    }

    #[test]
    fn closing_input_ends_game() {
        let mut session = session();
        let turn = session.close_input();
        assert_eq!(turn.status, SessionStatus::Ended(EndReason::InputClosed));

        let turn = session.close_input();
        assert_eq!(turn.status, SessionStatus::Ended(EndReason::InputClosed));
    }

    #[test]
    fn turns_are_counted() {
        let mut session = session();
        session.step("look");
        session.step("dance");
        session.step("");
        assert_eq!(session.player().turns, 2);
    }

    #[test]
    fn help_lists_builtins() {
        let mut session = session();
        insta::assert_snapshot!(session.step("help").text(), @r"
        List of all possible commands:
        DROP
        HELP
        INVENTORY
        LOOK
        TAKE
        QUIT
        ");
    }
}
