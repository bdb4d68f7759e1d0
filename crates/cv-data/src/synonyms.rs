//! Parser for `<Name>Synonyms.txt`: `ALIAS=CANONICAL` lines up to the first
//! blank line.

use cv_core::SynonymTable;

use crate::cursor::Cursor;
use crate::diagnostics::ParseError;

/// Parses the synonym table in `source`.
pub fn parse_synonyms(file: &str, source: &str) -> Result<SynonymTable, ParseError> {
    let mut cursor = Cursor::new(file, source);
    let mut table = SynonymTable::new();

    while let Some(line) = cursor.next_line() {
        if line.is_blank() {
            break;
        }
        let Some((alias, canonical)) = line.text.split_once('=') else {
            return Err(cursor
                .error(line, line.span(), "malformed synonym")
                .with_label("expected `ALIAS=WORD`"));
        };
        if alias.trim().is_empty() || canonical.trim().is_empty() {
            return Err(cursor
                .error(line, line.span(), "synonym has an empty side")
                .with_label("expected `ALIAS=WORD`"));
        }
        table.insert(alias, canonical);
    }

    Ok(table)
}
