//! End-to-end play scenarios driven through `GameSession`.

use cv_core::{Container, Exit, FORCED, GameObject, Room, RoomNumber, SynonymTable, World};
use cv_engine::{EndReason, EngineConfig, GameSession, SessionStatus};
use proptest::prelude::*;

fn session(rooms: Vec<Room>, objects: Vec<GameObject>) -> GameSession {
    let world = World::new(rooms, objects).unwrap();
    GameSession::new(world, SynonymTable::new(), EngineConfig::default())
}

fn two_rooms() -> Vec<Room> {
    vec![
        Room::new(1, "Road")
            .with_line("You are on a road.")
            .with_exit(Exit::new("NORTH", 2)),
        Room::new(2, "Forest")
            .with_line("You are in a forest.")
            .with_exit(Exit::new("SOUTH", 1)),
    ]
}

#[test]
fn walk_there_and_back_then_quit() {
    let mut session = session(two_rooms(), vec![]);

    let mut transcript = session.start().lines;
    for input in ["LOOK", "NORTH", "SOUTH"] {
        transcript.extend(session.step(input).lines);
    }
    assert_eq!(
        transcript,
        vec![
            "You are on a road.",
            "You are on a road.",
            "You are in a forest.",
            "Road",
        ]
    );

    let turn = session.step("QUIT");
    assert_eq!(
        turn.prompt.as_deref(),
        Some("Confirm quit, your progress will not be saved (Y/N)? ")
    );
    let turn = session.step("Y");
    assert_eq!(turn.status, SessionStatus::Ended(EndReason::Quit));
}

#[test]
fn key_opens_locked_exit() {
    let rooms = vec![
        Room::new(1, "Hall")
            .with_line("A hall.")
            .with_exit(Exit::new("WEST", 3).with_key("KEY")),
        Room::new(3, "Vault").with_line("A vault."),
    ];
    let objects = vec![GameObject::new("KEY", "a small key", 1)];

    let mut locked = session(rooms.clone(), objects.clone());
    locked.start();
    assert_eq!(locked.step("WEST").lines, vec!["Unavailable direction"]);
    assert_eq!(locked.player().current_room, RoomNumber(1));

    let mut open = session(rooms, objects);
    open.start();
    assert_eq!(open.step("TAKE KEY").lines, vec!["Taken"]);
    assert_eq!(open.step("WEST").lines, vec!["A vault."]);
    assert_eq!(open.player().current_room, RoomNumber(3));
}

#[test]
fn forced_exit_into_nowhere_ends_game() {
    let rooms = vec![
        Room::new(1, "Ledge")
            .with_line("A narrow ledge.")
            .with_exit(Exit::new("JUMP", 2)),
        Room::new(2, "Fall")
            .with_line("You fall into darkness.")
            .with_exit(Exit::new(FORCED, 99)),
    ];
    let mut session = session(rooms, vec![]);
    session.start();

    let turn = session.step("JUMP");
    assert_eq!(turn.lines, vec!["You fall into darkness."]);
    assert_eq!(turn.status, SessionStatus::Ended(EndReason::TerminalRoom));
    assert_eq!(turn.prompt, None);
    assert!(!session.world().room(RoomNumber(2)).unwrap().is_visited());
}

#[test]
fn forced_loop_ends_game() {
    let rooms = vec![
        Room::new(1, "Edge").with_exit(Exit::new("IN", 2)),
        Room::new(2, "Whirl").with_exit(Exit::new(FORCED, 3)),
        Room::new(3, "Pool").with_exit(Exit::new(FORCED, 2)),
    ];
    let world = World::new(rooms, vec![]).unwrap();
    let config = EngineConfig::default().with_max_forced_chain(5);
    let mut session = GameSession::new(world, SynonymTable::new(), config);
    session.start();

    let turn = session.step("IN");
    assert_eq!(turn.status, SessionStatus::Ended(EndReason::ForcedLoop));
    assert!(turn.text().contains("endless passage"));
}

#[test]
fn sessions_do_not_share_state() {
    let mut first = session(two_rooms(), vec![GameObject::new("MAP", "a map", 1)]);
    let mut second = session(two_rooms(), vec![GameObject::new("MAP", "a map", 1)]);
    first.start();
    second.start();

    first.step("TAKE MAP");
    first.step("NORTH");
    assert!(first.world().is_carried("MAP"));
    assert!(!second.world().is_carried("MAP"));
    assert!(!second.world().room(RoomNumber(2)).unwrap().is_visited());
}

#[test]
fn take_then_drop_puts_object_back() {
    let mut session = session(two_rooms(), vec![GameObject::new("MAP", "a map", 1)]);
    session.start();
    assert_eq!(
        session.world().container_of("MAP"),
        Some(Container::Room(RoomNumber(1)))
    );

    assert_eq!(session.step("TAKE MAP").lines, vec!["Taken"]);
    assert!(session.world().contents(RoomNumber(1)).is_empty());
    assert_eq!(session.step("DROP MAP").lines, vec!["Dropped"]);

    assert_eq!(
        session.world().container_of("MAP"),
        Some(Container::Room(RoomNumber(1)))
    );
    let here: Vec<_> = session
        .world()
        .contents(RoomNumber(1))
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(here, vec!["MAP"]);
    assert!(session.world().inventory().is_empty());
    assert_eq!(session.step("LOOK").lines, vec!["You are on a road.", "There is a map here"]);
}

#[test]
fn failed_commands_change_nothing() {
    let mut session = session(two_rooms(), vec![GameObject::new("MAP", "a map", 1)]);
    session.start();

    for input in ["DANCE", "TAKE SWORD", "DROP MAP", "EAST", "TAKE MAP MAP"] {
        session.step(input);
    }
    assert_eq!(session.player().current_room, RoomNumber(1));
    assert_eq!(
        session.world().container_of("MAP"),
        Some(Container::Room(RoomNumber(1)))
    );
    assert!(!session.world().room(RoomNumber(2)).unwrap().is_visited());
}

fn command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "TAKE MAP",
        "DROP MAP",
        "TAKE COIN",
        "DROP COIN",
        "NORTH",
        "SOUTH",
        "LOOK",
        "INVENTORY",
        "DANCE",
    ])
}

proptest! {
    #[test]
    fn every_object_stays_in_one_place(inputs in prop::collection::vec(command(), 0..40)) {
        let mut session = session(
            two_rooms(),
            vec![
                GameObject::new("MAP", "a map", 1),
                GameObject::new("COIN", "a coin", 2),
            ],
        );
        session.start();

        for input in inputs {
            session.step(input);
            prop_assert!(session.is_running());

            let world = session.world();
            let here = session.player().current_room;
            for name in ["MAP", "COIN"] {
                let holders = world.rooms()
                    .filter(|room| world.placements().is_in(name, Container::Room(room.number)))
                    .count()
                    + usize::from(world.is_carried(name));
                prop_assert_eq!(holders, 1);
            }
            prop_assert!(world.room(here).unwrap().is_visited());
        }
    }
}
