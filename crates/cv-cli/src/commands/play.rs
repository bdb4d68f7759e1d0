use std::io::{self, BufRead, Write};
use std::path::Path;

use cv_engine::{EngineConfig, GameSession, console};

pub fn run(dir: &Path, adventure: Option<&str>, confirm: Option<&str>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let name = match adventure {
        Some(name) => name.to_string(),
        None => ask_adventure(&mut reader)?,
    };
    let adventure = super::load(dir, &name)?;

    let mut config = EngineConfig::default();
    if let Some(token) = confirm {
        config = config.with_affirmative(token);
    }

    let mut session = GameSession::new(adventure.world, adventure.synonyms, config);
    let mut stdout = io::stdout().lock();
    let reason = console::run(&mut session, reader, &mut stdout).map_err(|e| e.to_string())?;

    tracing::info!(adventure = %adventure.name, ?reason, "session finished");
    Ok(())
}

fn ask_adventure(reader: &mut impl BufRead) -> Result<String, String> {
    print!("What will be your adventure today? ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;

    let name = line.trim();
    if name.is_empty() {
        return Err("no adventure given".into());
    }
    Ok(name.to_string())
}
