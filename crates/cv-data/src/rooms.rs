//! Parser for `<Name>Rooms.txt`.
//!
//! ```text
//! 1
//! Outside building
//! You are standing at the end of a road before a small brick
//! building.
//! -----
//! WEST      2
//! NORTH     3/KEYS
//! ```

use cv_core::{Exit, Room};

use crate::cursor::{Cursor, Line, parse_number};
use crate::diagnostics::ParseError;

/// Line that ends a room's long description. Matched exactly, so an indented
/// `-----` is part of the description.
pub const DESCRIPTION_END: &str = "-----";

/// Parses every room block in `source`.
pub fn parse_rooms(file: &str, source: &str) -> Result<Vec<Room>, ParseError> {
    let mut cursor = Cursor::new(file, source);
    let mut rooms = Vec::new();

    while cursor.skip_blank() {
        rooms.push(parse_room(&mut cursor)?);
    }

    Ok(rooms)
}

fn parse_room(cursor: &mut Cursor<'_>) -> Result<Room, ParseError> {
    let number_line = cursor.expect_line("a room number")?;
    let number = parse_number(number_line.text)
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            cursor
                .error(number_line, number_line.span(), "expected a room number")
                .with_label("room numbers are positive integers")
        })?;

    let name = cursor.expect_line("a room name")?.text.trim().to_string();
    let mut room = Room::new(number, name);

    loop {
        let line = cursor.next_line().ok_or_else(|| {
            cursor
                .error(number_line, number_line.span(), "room description is never closed")
                .with_label(format!("expected a `{DESCRIPTION_END}` line after this room"))
        })?;
        if line.text == DESCRIPTION_END {
            break;
        }
        room.description.push(line.text.to_string());
    }

    while let Some(line) = cursor.peek() {
        if line.is_blank() {
            break;
        }
        cursor.next_line();
        room.exits.push(parse_exit(cursor, line)?);
    }

    Ok(room)
}

fn parse_exit(cursor: &Cursor<'_>, line: Line<'_>) -> Result<Exit, ParseError> {
    let mut parts = line.text.split_whitespace();
    let (Some(direction), Some(target)) = (parts.next(), parts.next()) else {
        return Err(cursor
            .error(line, line.span(), "malformed exit")
            .with_label("expected `DIRECTION ROOM` or `DIRECTION ROOM/KEY`"));
    };

    let (room_part, key) = match target.split_once('/') {
        Some((room, key)) => (room, Some(key)),
        None => (target, None),
    };

    let destination = parse_number(room_part).ok_or_else(|| {
        cursor
            .error(line, line.span_of(room_part), "invalid destination room")
            .with_label("not a room number")
    })?;

    let mut exit = Exit::new(direction, destination);
    if let Some(key) = key {
        if key.trim().is_empty() {
            return Err(cursor
                .error(line, line.span_of(target), "exit key is empty")
                .with_label("expected an object name after `/`"));
        }
        exit = exit.with_key(key);
    }
    Ok(exit)
}
