use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use cv_core::Exit;
use cv_engine::CommandRegistry;

pub fn run(dir: &Path, name: &str) -> Result<(), String> {
    let adventure = super::load(dir, name)?;
    let world = &adventure.world;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Name", "Exits", "Objects"]);

    let mut terminal_exits = 0;
    for room in world.rooms() {
        terminal_exits += room
            .exits()
            .iter()
            .filter(|exit| world.room(exit.destination).is_none())
            .count();

        let exits: Vec<_> = room.exits().iter().map(describe_exit).collect();
        let objects: Vec<_> = world
            .contents(room.number)
            .iter()
            .map(|object| object.name.as_str())
            .collect();

        table.add_row(vec![
            room.number.to_string(),
            room.name.clone(),
            or_dash(exits.join(", ")),
            or_dash(objects.join(", ")),
        ]);
    }

    let registry = CommandRegistry::for_world(world);

    println!("{table}");
    println!();
    println!("  All checks passed for '{}'.", adventure.name.bold());
    println!(
        "  {} rooms, {} objects, {} synonyms, {} verbs",
        world.room_count(),
        world.object_count(),
        adventure.synonyms.len(),
        registry.len(),
    );
    if terminal_exits > 0 {
        println!(
            "  {} {terminal_exits} exit{} lead{} out of the adventure",
            "note:".yellow().bold(),
            if terminal_exits == 1 { "" } else { "s" },
            if terminal_exits == 1 { "s" } else { "" },
        );
    }

    Ok(())
}

fn describe_exit(exit: &Exit) -> String {
    match &exit.key {
        Some(key) => format!("{} -> {} ({key})", exit.direction, exit.destination),
        None => format!("{} -> {}", exit.direction, exit.destination),
    }
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "-".to_string() } else { text }
}
