//! Synchronous read-eval-print loop.
//!
//! Prompts are written without a trailing newline and flushed before each read;
//! every output line ends with a newline.

use std::io::{self, BufRead, Write};

use crate::output::{EndReason, Turn};
use crate::session::GameSession;

/// Plays `session` to the end, reading commands from `reader`.
///
/// Returns why the game ended. End of input ends the game with
/// [`EndReason::InputClosed`].
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut reader: R,
    writer: &mut W,
) -> io::Result<EndReason> {
    let mut turn = session.start();
    let mut line = String::new();

    loop {
        write_turn(writer, &turn)?;
        let Some(prompt) = turn.prompt.as_deref() else {
            break;
        };
        write!(writer, "{prompt}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            writeln!(writer)?;
            session.close_input();
            break;
        }
        turn = session.step(line.trim_end_matches(['\r', '\n']));
    }

    writer.flush()?;
    Ok(session.end_reason().unwrap_or(EndReason::InputClosed))
}

fn write_turn<W: Write>(writer: &mut W, turn: &Turn) -> io::Result<()> {
    for line in &turn.lines {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
