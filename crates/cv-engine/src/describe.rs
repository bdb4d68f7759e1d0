use cv_core::{Room, World};

/// The long description of `room` followed by one line per object in it.
pub(crate) fn room_description(world: &World, room: &Room) -> Vec<String> {
    let mut lines = room.description.clone();
    for object in world.contents(room.number) {
        lines.push(format!("There is {} here", object.description));
    }
    lines
}

/// One `NAME: description` line per carried object.
pub(crate) fn inventory_listing(world: &World) -> Vec<String> {
    world
        .inventory()
        .into_iter()
        .map(|o| format!("{}: {}", o.name, o.description))
        .collect()
}
