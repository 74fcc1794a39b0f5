use cavern::catalog::{Catalog, names};
use cavern::commands::CommandError;
use cavern::models::room::Room;
use cavern::models::types::{Coord, Direction};
use cavern::{Game, process_command};
use std::sync::Arc;

fn game() -> Game {
    Game::new(Arc::new(Catalog::embedded().unwrap()), Some(42)).unwrap()
}

/// Run one command and return everything it printed.
fn run(g: &mut Game, cmd: &str) -> String {
    process_command(cmd, g).unwrap();
    let out = g.output.text();
    g.output.drain();
    out
}

fn give(g: &mut Game, name: &str) {
    let item = g.catalog.item(name).unwrap().clone();
    g.player.add_item(&item);
}

/// Replace the room under the player with a bare one.
fn stage(g: &mut Game, dark: bool, open: &[Direction], items: &[&str]) {
    let mut room = Room {
        dark,
        ..Room::default()
    };
    for dir in open {
        room.exits.set(*dir, true);
    }
    for name in items {
        room.add_item(g.catalog.item(name).unwrap());
    }
    let pos = g.player.position;
    g.world.set(pos, room);
}

fn stage_at(g: &mut Game, pos: Coord, dark: bool, open: &[Direction], items: &[&str]) {
    g.player.position = pos;
    stage(g, dark, open, items);
}

fn here(g: &Game) -> &Room {
    g.world.peek(g.player.position).unwrap()
}

const CARDINALS: &[Direction] = &[Direction::North, Direction::South, Direction::East, Direction::West];

#[test]
fn t_starts_with_no_tea() {
    let mut g = game();
    assert_eq!(g.player.item_names(), vec!["no tea"]);
    assert_eq!(run(&mut g, "i"), "You are carrying no tea.");
}

#[test]
fn t_empty_and_unknown_input_take_no_turn() {
    let mut g = game();
    assert!(!run(&mut g, "").is_empty());
    assert!(!run(&mut g, "juggle the pigs").is_empty());
    assert_eq!(g.player.turn, 0);

    assert_eq!(run(&mut g, "wait"), "Time passes...");
    assert_eq!(g.player.turn, 1);
    assert_eq!(g.player.time_in_room, 1);
}

#[test]
fn t_go_moves_through_open_exits_only() {
    let mut g = game();
    stage(&mut g, false, &[Direction::North], &[]);

    assert_eq!(run(&mut g, "go east"), "You can't go that way.");
    assert_eq!(run(&mut g, "go sideways"), "I don't understand that direction.");
    assert_eq!(run(&mut g, "go"), "Go where?");
    assert_eq!(g.player.position, Coord::new(0, 0, 0));

    let out = run(&mut g, "n");
    assert_eq!(g.player.position, Coord::new(0, 0, 1));
    assert_eq!(g.player.time_in_room, 1);
    assert!(out.starts_with("You are standing"), "{out}");
}

#[test]
fn t_going_west_sings() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &[]);

    let first = g.catalog.go_west[0].clone();
    let second = g.catalog.go_west[1].clone();
    assert!(run(&mut g, "go west").starts_with(&first));
    assert!(run(&mut g, "w").starts_with(&second));

    // Any other move ends the song for good
    run(&mut g, "go north");
    assert!(!run(&mut g, "go west").contains(&first));
}

#[test]
fn t_look_at_things() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &["a river"]);

    let out = run(&mut g, "look");
    assert!(out.contains("There is a river here."), "{out}");
    assert_eq!(
        run(&mut g, "look at river"),
        "The river flows majestically towards the horizon. It doesn't do anything else."
    );
    assert_eq!(run(&mut g, "look at no tea"), "Pull yourself together man.");
    assert_eq!(run(&mut g, "look at myself"), "Very handsome.");
    assert_eq!(run(&mut g, "look at unicorn"), "You don't see any unicorn here.");
}

#[test]
fn t_darkness_hides_everything_until_a_torch_is_placed() {
    let mut g = game();
    stage_at(&mut g, Coord::new(0, -2, 0), true, &[Direction::North], &[names::STONE]);

    assert_eq!(run(&mut g, "look"), "It is pitch dark.");
    assert_eq!(run(&mut g, "look at stone"), "It is pitch dark.");

    assert_eq!(run(&mut g, "place torch"), "You don't have torches.");
    assert!(here(&g).dark);

    give(&mut g, names::TORCHES);
    assert_eq!(run(&mut g, "place torch"), "The cave lights up under the torchflame.");
    assert!(!here(&g).dark);
    assert!(here(&g).has_item(names::TORCH));
    assert!(g.player.has_item(names::TORCHES));

    let out = run(&mut g, "look");
    assert!(out.starts_with("You are underground. You can travel north."), "{out}");

    // Taking the torch back puts the lights out again
    assert_eq!(run(&mut g, "take torch"), "The cave plunges into darkness.");
    assert!(here(&g).dark);
    assert!(!here(&g).has_item(names::TORCH));
    assert!(!g.player.has_item(names::TORCH));
}

#[test]
fn t_take_and_drop_round_trip() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &[names::TORCH]);

    assert_eq!(run(&mut g, "take"), "Take what?");
    assert_eq!(run(&mut g, "take the torch"), "Taken.");
    assert!(g.player.has_item(names::TORCH));
    assert!(!here(&g).has_item(names::TORCH));

    assert_eq!(run(&mut g, "drop torch"), "Dropped.");
    assert!(!g.player.has_item(names::TORCH));
    assert!(here(&g).has_item(names::TORCH));

    assert_eq!(run(&mut g, "drop no tea"), "You can't drop that.");
    assert!(g.player.has_item("no tea"));
    assert_eq!(run(&mut g, "drop spoon"), "You don't have spoon.");
}

#[test]
fn t_take_refuses_heavy_things_and_ore() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &["a pig", names::COAL]);

    assert_eq!(run(&mut g, "take pig"), "You can't carry a pig.");
    assert_eq!(run(&mut g, "take coal"), "You need to mine this ore.");
    assert_eq!(g.player.item_names(), vec!["no tea"]);
    assert!(here(&g).has_item("a pig"));
    assert!(here(&g).has_item(names::COAL));
}

#[test]
fn t_dig_never_goes_through_the_sky_or_bedrock() {
    let mut g = game();
    give(&mut g, "a diamond pickaxe");
    stage(&mut g, false, CARDINALS, &[]);

    assert_eq!(run(&mut g, "dig up"), "You can't dig that way.");
    assert_eq!(g.player.position, Coord::new(0, 0, 0));

    stage_at(&mut g, Coord::new(0, -3, 0), true, &[], &[]);
    let before = here(&g).clone();
    assert_eq!(run(&mut g, "dig down"), "You hit bedrock.");
    assert_eq!(g.player.position, Coord::new(0, -3, 0));
    assert_eq!(here(&g), &before);
    assert!(!g.player.has_item(names::STONE));
}

#[test]
fn t_dig_needs_a_pickaxe() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &[]);

    assert_eq!(run(&mut g, "dig down"), "You need to use a pickaxe to dig through stone.");
    give(&mut g, "a wooden sword");
    assert_eq!(
        run(&mut g, "dig down with sword"),
        "You need to use a pickaxe to dig through stone."
    );
    assert_eq!(run(&mut g, "dig down with pickaxe"), "You're not carrying pickaxe.");

    assert_eq!(g.player.position, Coord::new(0, 0, 0));
    assert!(!here(&g).exits.down);
    assert!(g.world.peek(Coord::new(0, -1, 0)).is_none());
    assert!(!g.player.has_item(names::STONE));
}

#[test]
fn t_dig_down_into_a_cave() {
    let mut g = game();
    give(&mut g, "a wooden pickaxe");
    stage(&mut g, false, CARDINALS, &[]);

    let out = run(&mut g, "dig down");
    assert!(out.starts_with("You dig down using a wooden pickaxe and collect some dirt and stone."), "{out}");

    let top = g.world.peek(Coord::new(0, 0, 0)).unwrap();
    assert!(top.exits.down);
    assert!(top.has_item(names::CAVE_ENTRANCE));

    assert_eq!(g.player.position, Coord::new(0, -1, 0));
    assert!(here(&g).exits.up);
    assert!(here(&g).has_item(names::EXIT_TO_SURFACE));
    assert!(g.player.has_item(names::STONE));
    assert!(g.player.has_item(names::DIRT));
    assert_eq!(g.player.time_in_room, 1);

    // And straight back up the same way, no digging required
    run(&mut g, "go up");
    assert_eq!(g.player.position, Coord::new(0, 0, 0));
}

#[test]
fn t_dig_sideways_opens_both_sides() {
    let mut g = game();
    give(&mut g, "a stone pickaxe");
    stage_at(&mut g, Coord::new(0, -2, 0), false, &[], &[]);

    let out = run(&mut g, "dig east");
    assert!(out.starts_with("You dig east using a stone pickaxe and collect some stone."), "{out}");
    assert!(!g.player.has_item(names::DIRT));

    let from = g.world.peek(Coord::new(0, -2, 0)).unwrap();
    let to = g.world.peek(Coord::new(0, -2, 0).step(Direction::East)).unwrap();
    assert!(from.exits.east);
    assert!(to.exits.west);
    assert_eq!(g.player.position, Coord::new(0, -2, 0).step(Direction::East));
}

#[test]
fn t_mining_tool_checks() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &[names::IRON]);

    assert_eq!(run(&mut g, "mine"), "Mine what?");
    assert_eq!(run(&mut g, "mine iron"), "Mine iron with what?");
    assert_eq!(run(&mut g, "break iron"), "You need a tool to break this ore.");
    assert_eq!(run(&mut g, "mine iron with no tea"), "You can't break some iron with no tea.");

    give(&mut g, "a wooden sword");
    assert_eq!(
        run(&mut g, "mine iron with sword"),
        "You need a different kind of tool to break this ore."
    );

    give(&mut g, "a wooden pickaxe");
    assert_eq!(
        run(&mut g, "mine iron"),
        "A wooden pickaxe is not strong enough to break this ore."
    );
    assert!(here(&g).has_item(names::IRON));
    assert!(!g.player.has_item(names::IRON));

    // The best pickaxe is picked automatically
    give(&mut g, "a stone pickaxe");
    assert_eq!(run(&mut g, "mine iron"), "The ore breaks, dropping some iron, which you pick up.");
    assert!(!here(&g).has_item(names::IRON));
    assert!(g.player.has_item(names::IRON));
}

#[test]
fn t_stone_never_runs_out() {
    let mut g = game();
    give(&mut g, "a wooden pickaxe");
    stage(&mut g, false, CARDINALS, &[names::STONE]);

    for _ in 0..3 {
        assert_eq!(
            run(&mut g, "mine the stone with the wooden pickaxe"),
            "The ore breaks, dropping some stone, which you pick up."
        );
        assert!(here(&g).has_item(names::STONE));
    }
    assert!(g.player.has_item(names::STONE));
}

#[test]
fn t_breaking_trees_yields_wood() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &[]);
    assert_eq!(
        run(&mut g, "punch the tree"),
        "The tree breaks into blocks of wood, which you pick up."
    );
    assert!(g.player.has_item(names::WOOD));
}

#[test]
fn t_breaking_yourself_ends_the_session() {
    let mut g = game();
    run(&mut g, "break myself");
    assert!(!g.is_running());
    assert!(matches!(process_command("look", &mut g), Err(CommandError::SessionEnded)));
}

#[test]
fn t_animals() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &["a sheep", "a pig"]);

    assert_eq!(run(&mut g, "hit sheep"), "You hit a sheep. It drops some wool, which you pick up.");
    assert!(here(&g).has_item("a sheep"));
    assert!(g.player.has_item("some wool"));

    assert_eq!(run(&mut g, "kill the pig"), "You kill a pig. It drops some pork, which you pick up.");
    assert!(!here(&g).has_item("a pig"));
    assert!(g.player.has_item("some pork"));
}

#[test]
fn t_monsters_hurt_without_a_sword() {
    let mut g = game();
    stage(&mut g, false, CARDINALS, &["a zombie"]);

    run(&mut g, "attack zombie");
    assert!(g.player.injured);
    assert!(here(&g).has_item("a zombie"));

    assert_eq!(run(&mut g, "attack zombie"), "You are too hurt to fight.");
    assert!(here(&g).has_item("a zombie"));

    give(&mut g, "some pork");
    assert_eq!(run(&mut g, "eat pork"), "You eat some pork. You feel better.");
    assert!(!g.player.injured);
    assert!(!g.player.has_item("some pork"));

    give(&mut g, "an iron sword");
    assert_eq!(run(&mut g, "attack the zombie"), "You slay a zombie with an iron sword.");
    assert!(!here(&g).has_item("a zombie"));
    assert!(!g.player.injured);
}

#[test]
fn t_crafting() {
    let mut g = game();

    assert_eq!(run(&mut g, "craft a spaceship"), "You don't know how to make spaceship.");
    assert_eq!(
        run(&mut g, "make some torches"),
        "You need some sticks and some coal to make some torches."
    );

    give(&mut g, names::WOOD);
    assert_eq!(run(&mut g, "craft planks"), "You craft some planks.");
    assert!(!g.player.has_item(names::WOOD));
    assert!(g.player.has_item("some planks"));

    assert_eq!(run(&mut g, "craft sticks"), "You craft some sticks.");
    assert_eq!(
        run(&mut g, "craft a wooden pickaxe"),
        "You need some planks to make a wooden pickaxe."
    );
    assert!(g.player.has_item("some sticks"));
}

#[test]
fn t_building() {
    let mut g = game();
    assert_eq!(run(&mut g, "build a hut"), "Build a hut out of what?");
    assert_eq!(run(&mut g, "build a hut out of dirt"), "You don't have dirt.");
    assert_eq!(
        run(&mut g, "build a hut out of no tea"),
        "You can't build anything out of no tea."
    );

    give(&mut g, names::DIRT);
    assert_eq!(run(&mut g, "build a hut out of dirt"), "You build a hut out of some dirt.");
    assert!(!g.player.has_item(names::DIRT));
}

#[test]
fn t_eating_needs_food() {
    let mut g = game();
    assert_eq!(run(&mut g, "eat"), "Eat what?");
    assert_eq!(run(&mut g, "eat no tea"), "You can't eat no tea.");
    assert!(g.player.has_item("no tea"));
}

#[test]
fn t_quit() {
    let mut g = game();
    assert_eq!(run(&mut g, "good bye"), "Goodbye!");
    assert!(!g.is_running());
}
