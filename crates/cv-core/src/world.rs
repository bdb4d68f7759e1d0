use std::collections::{BTreeMap, HashMap};

use crate::error::{WorldError, WorldResult};
use crate::object::GameObject;
use crate::placement::{Container, Placements};
use crate::room::{Room, RoomNumber};

/// The central world model. Owns rooms, objects, and where each object is.
#[derive(Debug, Clone)]
pub struct World {
    rooms: BTreeMap<RoomNumber, Room>,
    start: RoomNumber,
    objects: HashMap<String, GameObject>,
    placements: Placements,
}

impl World {
    /// Assembles a world from loaded records.
    ///
    /// Every object is placed in its initial room. Exit destinations are not
    /// checked: an exit into a missing room is how a game ends.
    pub fn new(rooms: Vec<Room>, objects: Vec<GameObject>) -> WorldResult<Self> {
        let mut by_number = BTreeMap::new();
        for room in rooms {
            if room.number.get() == 0 {
                return Err(WorldError::InvalidRoomNumber(0));
            }
            let number = room.number;
            if by_number.insert(number, room).is_some() {
                return Err(WorldError::DuplicateRoom(number));
            }
        }
        let start = *by_number.keys().next().ok_or(WorldError::NoRooms)?;

        let mut by_name = HashMap::new();
        let mut placements = Placements::new();
        for object in objects {
            if object.name.trim().is_empty() {
                return Err(WorldError::EmptyObjectName(object.description));
            }
            if !by_number.contains_key(&object.initial_location) {
                return Err(WorldError::UnknownLocation {
                    object: object.name,
                    room: object.initial_location,
                });
            }
            if by_name.contains_key(&object.name) {
                return Err(WorldError::DuplicateObject(object.name));
            }
            placements.place(object.name.clone(), Container::Room(object.initial_location));
            by_name.insert(object.name.clone(), object);
        }

        let world = Self {
            rooms: by_number,
            start,
            objects: by_name,
            placements,
        };
        world.warn_unknown_keys();
        Ok(world)
    }

    fn warn_unknown_keys(&self) {
        for room in self.rooms.values() {
            for exit in room.exits() {
                if let Some(key) = &exit.key {
                    if !self.objects.contains_key(key) {
                        tracing::warn!(
                            room = %room.number,
                            direction = %exit.direction,
                            key = %key,
                            "exit requires an object that does not exist; it can never be used"
                        );
                    }
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Get a room by number.
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// The room with the smallest number, where play starts.
    pub fn first_room(&self) -> &Room {
        // `start` is a key of `rooms`, and rooms are never removed.
        &self.rooms[&self.start]
    }

    /// All rooms in ascending number order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Sets a room's visited flag.
    pub fn set_visited(&mut self, number: RoomNumber, visited: bool) -> WorldResult<()> {
        let room = self
            .rooms
            .get_mut(&number)
            .ok_or(WorldError::RoomNotFound(number))?;
        room.set_visited(visited);
        Ok(())
    }

    /// Every distinct exit direction, in order of first appearance by room number.
    pub fn directions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for exit in self.rooms.values().flat_map(|r| r.exits()) {
            if !seen.contains(&exit.direction.as_str()) {
                seen.push(&exit.direction);
            }
        }
        seen
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    /// Get an object by name (exact, upper-case).
    pub fn object(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }

    /// All objects, sorted by name.
    pub fn objects(&self) -> Vec<&GameObject> {
        let mut all: Vec<&GameObject> = self.objects.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The placement ledger.
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Where an object currently is.
    pub fn container_of(&self, name: &str) -> Option<Container> {
        self.placements.container_of(name)
    }

    /// Objects lying in a room, in the order they arrived.
    pub fn contents(&self, number: RoomNumber) -> Vec<&GameObject> {
        self.resolve(self.placements.contents(Container::Room(number)))
    }

    /// Objects the player carries, in the order they were picked up.
    pub fn inventory(&self) -> Vec<&GameObject> {
        self.resolve(self.placements.contents(Container::Inventory))
    }

    /// Whether the player carries the named object.
    pub fn is_carried(&self, name: &str) -> bool {
        self.placements.is_in(name, Container::Inventory)
    }

    /// Moves an object into a container, taking it out of its current one.
    pub fn move_object(&mut self, name: &str, to: Container) -> WorldResult<()> {
        if !self.objects.contains_key(name) {
            return Err(WorldError::ObjectNotFound(name.to_string()));
        }
        if let Container::Room(number) = to {
            if !self.rooms.contains_key(&number) {
                return Err(WorldError::RoomNotFound(number));
            }
        }
        self.placements.place(name, to);
        Ok(())
    }

    fn resolve(&self, names: Vec<&str>) -> Vec<&GameObject> {
        names
            .into_iter()
            .filter_map(|name| self.objects.get(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Exit, FORCED};

    fn test_world() -> World {
        let rooms = vec![
            Room::new(3, "Debris room")
                .with_line("You are in a debris room.")
                .with_exit(Exit::new("EAST", 1)),
            Room::new(1, "Outside building")
                .with_line("You are standing at the end of a road.")
                .with_exit(Exit::new("WEST", 3).with_key("KEYS"))
                .with_exit(Exit::new("NORTH", 2)),
            Room::new(2, "Cliff")
                .with_exit(Exit::new(FORCED, 99)),
        ];
        let objects = vec![
            GameObject::new("KEYS", "a set of keys", 1),
            GameObject::new("LAMP", "a brightly shining brass lamp", 1),
        ];
        World::new(rooms, objects).unwrap()
    }

    #[test]
    fn first_room_is_lowest_number() {
        let world = test_world();
        assert_eq!(world.first_room().number, RoomNumber(1));
        assert_eq!(world.room_count(), 3);
    }

    #[test]
    fn first_room_survives_clone_and_visits() {
        let mut world = World::new(
            vec![Room::new(9, "Late"), Room::new(4, "Early")],
            vec![],
        )
        .unwrap();
        world.set_visited(RoomNumber(4), true).unwrap();
        let copy = world.clone();
        assert_eq!(copy.first_room().number, RoomNumber(4));
        assert!(copy.first_room().is_visited());
    }

    #[test]
    fn objects_start_in_initial_room() {
        let world = test_world();
        let names: Vec<_> = world
            .contents(RoomNumber(1))
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["KEYS", "LAMP"]);
        assert!(world.inventory().is_empty());
    }

    #[test]
    fn move_object_between_room_and_inventory() {
        let mut world = test_world();
        world.move_object("KEYS", Container::Inventory).unwrap();
        assert!(world.is_carried("KEYS"));
        assert_eq!(world.contents(RoomNumber(1)).len(), 1);

        world.move_object("KEYS", Container::Room(RoomNumber(3))).unwrap();
        assert_eq!(world.container_of("KEYS"), Some(Container::Room(RoomNumber(3))));
        assert!(!world.is_carried("KEYS"));
    }

    #[test]
    fn move_unknown_object_fails() {
        let mut world = test_world();
        let err = world.move_object("SWORD", Container::Inventory).unwrap_err();
        assert!(matches!(err, WorldError::ObjectNotFound(name) if name == "SWORD"));
    }

    #[test]
    fn directions_are_distinct_in_room_order() {
        let world = test_world();
        assert_eq!(world.directions(), vec!["WEST", "NORTH", FORCED, "EAST"]);
    }

    #[test]
    fn visited_flag_round_trip() {
        let mut world = test_world();
        assert!(!world.room(RoomNumber(2)).unwrap().is_visited());
        world.set_visited(RoomNumber(2), true).unwrap();
        assert!(world.room(RoomNumber(2)).unwrap().is_visited());
        assert!(world.set_visited(RoomNumber(42), true).is_err());
    }

    #[test]
    fn rejects_empty_world() {
        assert!(matches!(World::new(vec![], vec![]), Err(WorldError::NoRooms)));
    }

    #[test]
    fn rejects_room_zero() {
        let err = World::new(vec![Room::new(0, "Void")], vec![]).unwrap_err();
        assert!(matches!(err, WorldError::InvalidRoomNumber(0)));
    }

    #[test]
    fn rejects_duplicate_rooms() {
        let err = World::new(vec![Room::new(1, "A"), Room::new(1, "B")], vec![]).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(RoomNumber(1))));
    }

    #[test]
    fn rejects_duplicate_objects() {
        let err = World::new(
            vec![Room::new(1, "A")],
            vec![
                GameObject::new("ROD", "a black rod", 1),
                GameObject::new("rod", "another rod", 1),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateObject(name) if name == "ROD"));
    }

    #[test]
    fn rejects_object_in_missing_room() {
        let err = World::new(
            vec![Room::new(1, "A")],
            vec![GameObject::new("BIRD", "a little bird", 8)],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "object \"BIRD\" starts in unknown room 8");
    }
}
