//! Parser for `<Name>Objects.txt`.
//!
//! Each object is three lines: its name, its description, and the number of
//! the room it starts in. Blank lines between objects are ignored.

use cv_core::GameObject;

use crate::cursor::{Cursor, parse_number};
use crate::diagnostics::ParseError;

/// Parses every object block in `source`.
pub fn parse_objects(file: &str, source: &str) -> Result<Vec<GameObject>, ParseError> {
    let mut cursor = Cursor::new(file, source);
    let mut objects = Vec::new();

    while cursor.skip_blank() {
        let name_line = cursor.expect_line("an object name")?;
        // Only the first word names the object.
        let name = name_line.text.split_whitespace().next().unwrap_or_default();

        let description = cursor.expect_line("an object description")?.text.trim();

        let location_line = cursor.expect_line("an initial room number")?;
        let location = parse_number(location_line.text).ok_or_else(|| {
            cursor
                .error(location_line, location_line.span(), "expected an initial room number")
                .with_label(format!("where does {name} start?"))
        })?;

        objects.push(GameObject::new(name, description, location));
    }

    Ok(objects)
}
