//! Procedural room generation.
//!
//! Every edge between two adjacent rooms is decided exactly once: by whichever of the two rooms
//! is generated first. The second room copies the decision from its neighbour instead of
//! rolling again. Neighbours are only ever inspected with [`World::peek`], so generating one
//! room never generates another.
//!
//! The surface/underground seam is one-way: a room at `y == -1` only gets an `up` exit when
//! the surface room above already has a cave entrance, and a surface room only rolls for a
//! cave entrance when nothing below it exists yet.

use crate::catalog::{Catalog, names};
use crate::models::room::Room;
use crate::models::types::{BEDROCK_Y, Coord, Direction, SURFACE_Y};
use crate::world::World;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// Chance (1 in N) of a passage to a not yet generated underground neighbour.
const PASSAGE_ODDS: u32 = 3;
const ANIMAL_ODDS: u32 = 3;
const SURFACE_STONE_ODDS: u32 = 5;
const SURFACE_COAL_ODDS: u32 = 8;
const RIVER_ODDS: u32 = 8;
const CAVE_ENTRANCE_ODDS: u32 = 8;
const CAVE_COAL_ODDS: u32 = 3;
const IRON_ODDS: u32 = 8;
const DIAMOND_ODDS: u32 = 15;

pub(crate) fn generate(world: &mut World, coord: Coord) -> Room {
    let catalog = Arc::clone(&world.catalog);

    let room = if coord.y >= SURFACE_Y {
        surface(world, &catalog, coord)
    } else {
        underground(world, &catalog, coord)
    };

    tracing::debug!(
        %coord,
        biome = ?room.biome,
        exits = ?room.exits.open(),
        items = room.items.len(),
        "generated room"
    );
    room
}

fn surface(world: &mut World, catalog: &Catalog, coord: Coord) -> Room {
    let rng = &mut world.rng;
    let mut room = Room::default();

    let biome_idx = rng.random_range(0..catalog.biomes.len());
    let biome = &catalog.biomes[biome_idx];
    room.biome = Some(biome_idx);
    room.trees = biome.trees;

    if rng.random_ratio(1, ANIMAL_ODDS)
        && let Some(animal) = catalog.animals.choose(rng)
    {
        place(&mut room, catalog, animal);
    }

    if rng.random_ratio(1, SURFACE_STONE_ODDS) || biome.stone {
        place(&mut room, catalog, names::STONE);
    }

    if rng.random_ratio(1, SURFACE_COAL_ODDS) {
        place(&mut room, catalog, names::COAL);
    }

    if rng.random_ratio(1, RIVER_ODDS) && biome.rivers {
        place(&mut room, catalog, names::RIVER);
    }

    for dir in [Direction::North, Direction::South, Direction::East, Direction::West] {
        room.exits.set(dir, true);
    }

    // The room below may already exist (dug into from the side); its ceiling is authoritative.
    let below = world.peek(coord.step(Direction::Down)).map(|r| r.exits.up);
    let cave = match below {
        Some(open) => open,
        None => world.rng.random_ratio(1, CAVE_ENTRANCE_ODDS),
    };
    if cave {
        room.exits.down = true;
        place(&mut room, catalog, names::CAVE_ENTRANCE);
    }

    room
}

fn underground(world: &mut World, catalog: &Catalog, coord: Coord) -> Room {
    let mut room = Room {
        dark: true,
        ..Room::default()
    };

    if coord.y == SURFACE_Y - 1 {
        let above_has_cave = world
            .peek(coord.step(Direction::Up))
            .is_some_and(|above| above.exits.down);
        if above_has_cave {
            room.exits.up = true;
            place(&mut room, catalog, names::EXIT_TO_SURFACE);
        }
    } else {
        decide_exit(world, &mut room, coord, Direction::Up);
    }

    if coord.y > BEDROCK_Y {
        decide_exit(world, &mut room, coord, Direction::Down);
    }

    for dir in [Direction::East, Direction::West, Direction::North, Direction::South] {
        decide_exit(world, &mut room, coord, dir);
    }

    place(&mut room, catalog, names::STONE);

    let rng = &mut world.rng;
    if rng.random_ratio(1, CAVE_COAL_ODDS) {
        place(&mut room, catalog, names::COAL);
    }
    if rng.random_ratio(1, IRON_ODDS) {
        place(&mut room, catalog, names::IRON);
    }
    if coord.y == BEDROCK_Y && rng.random_ratio(1, DIAMOND_ODDS) {
        place(&mut room, catalog, names::DIAMOND);
    }

    room
}

/// Copy the neighbour's decision for this edge, or roll for it when the neighbour doesn't exist yet.
fn decide_exit(world: &mut World, room: &mut Room, coord: Coord, dir: Direction) {
    let decided = world.peek(coord.step(dir)).map(|n| n.exits.get(dir.opposite()));
    let open = match decided {
        Some(open) => open,
        None => world.rng.random_ratio(1, PASSAGE_ODDS),
    };
    room.exits.set(dir, open);
}

fn place(room: &mut Room, catalog: &Catalog, name: &str) {
    match catalog.item(name) {
        Ok(item) => room.add_item(item),
        Err(e) => tracing::warn!(error = %e, "generator: skipping item"),
    }
}
