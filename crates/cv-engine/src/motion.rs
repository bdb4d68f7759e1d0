//! Movement and forced-exit resolution.
//!
//! Moving from room R in direction D takes the first exit of R, in table
//! order, whose direction is D and whose key (if any) is carried. Arriving in a
//! room whose *first* exit is `FORCED` immediately takes that exit too, without
//! marking the room visited, so a chain of such rooms acts as one passage.

use cv_core::{Exit, FORCED, Room, RoomNumber, World, WorldError};

use crate::describe::room_description;
use crate::error::{EngineError, EngineResult};
use crate::player::PlayerState;

/// How a move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// The player stopped in this room.
    Arrived(RoomNumber),
    /// The exit led to a room number with no room; the game is over.
    Terminal(RoomNumber),
    /// A forced exit of this room could not be used; the player is stuck here.
    Stalled(RoomNumber),
    /// Forced exits were still leading on from this room at the chain limit.
    ForcedLoop(RoomNumber),
}

/// Text and outcome of a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motion {
    /// Room descriptions and names shown along the way.
    pub lines: Vec<String>,
    /// Where the move ended.
    pub outcome: MotionOutcome,
}

/// Applies moves to a world and player.
pub struct MotionResolver<'a> {
    world: &'a mut World,
    player: &'a mut PlayerState,
    max_forced_chain: usize,
}

impl<'a> MotionResolver<'a> {
    /// Create a resolver following at most `max_forced_chain` forced exits per move.
    pub fn new(world: &'a mut World, player: &'a mut PlayerState, max_forced_chain: usize) -> Self {
        Self {
            world,
            player,
            max_forced_chain,
        }
    }

    /// Moves the player in `direction`.
    ///
    /// Fails with [`EngineError::UnavailableDirection`], leaving everything
    /// unchanged, when the current room has no usable exit that way.
    pub fn travel(&mut self, direction: &str) -> EngineResult<Motion> {
        let mut lines = Vec::new();
        let mut direction = direction.to_string();
        let mut forced_steps = 0usize;

        loop {
            let here = self.player.current_room;
            let room = self
                .world
                .room(here)
                .ok_or(WorldError::RoomNotFound(here))?;

            let Some(exit) = usable_exit(self.world, room, &direction) else {
                if forced_steps == 0 {
                    return Err(EngineError::UnavailableDirection(direction));
                }
                tracing::warn!(room = %here, "forced exit is locked; player stays put");
                lines.push(EngineError::UnavailableDirection(direction).to_string());
                return Ok(Motion {
                    lines,
                    outcome: MotionOutcome::Stalled(here),
                });
            };
            let destination = exit.destination;

            let Some(next) = self.world.room(destination) else {
                tracing::debug!(from = %here, to = %destination, "terminal transition");
                self.player.stop();
                return Ok(Motion {
                    lines,
                    outcome: MotionOutcome::Terminal(destination),
                });
            };

            tracing::debug!(from = %here, to = %destination, direction = %direction, "moved");
            self.player.current_room = destination;
            if next.is_visited() {
                lines.push(next.name.clone());
            } else {
                lines.extend(room_description(self.world, next));
            }

            if next.forced_exit().is_none() {
                self.world.set_visited(destination, true)?;
                return Ok(Motion {
                    lines,
                    outcome: MotionOutcome::Arrived(destination),
                });
            }

            forced_steps += 1;
            if forced_steps > self.max_forced_chain {
                tracing::warn!(room = %destination, steps = forced_steps, "forced exit chain cut off");
                self.player.stop();
                return Ok(Motion {
                    lines,
                    outcome: MotionOutcome::ForcedLoop(destination),
                });
            }
            direction = FORCED.to_string();
        }
    }
}

/// The first exit of `room` in `direction` that the player can use.
pub fn usable_exit<'w>(world: &World, room: &'w Room, direction: &str) -> Option<&'w Exit> {
    room.exits().iter().find(|exit| {
        exit.direction == direction
            && exit
                .key
                .as_deref()
                .is_none_or(|key| world.is_carried(key))
    })
}
