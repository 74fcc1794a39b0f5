//! Room graph store.
//!
//! Rooms are created the first time a coordinate is requested through [`World::get`] and are
//! never removed. [`World::peek`] looks without generating, which is what the generator uses
//! when it inspects neighbours.

use crate::catalog::Catalog;
use crate::models::room::Room;
use crate::models::types::Coord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::Arc;

pub mod generator;

pub struct World {
    rooms: HashMap<Coord, Room>,
    rng: StdRng,
    catalog: Arc<Catalog>,
}

impl World {
    /// Create an empty world. With a seed, generation is reproducible.
    pub fn new(catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rooms: HashMap::new(),
            rng,
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Room at `coord`, or `None` when it has not been generated yet. Never generates.
    pub fn peek(&self, coord: Coord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn is_generated(&self, coord: Coord) -> bool {
        self.rooms.contains_key(&coord)
    }

    /// Room at `coord`, generating it on first access.
    pub fn get(&mut self, coord: Coord) -> &Room {
        if !self.rooms.contains_key(&coord) {
            let room = generator::generate(self, coord);
            self.rooms.insert(coord, room);
        }

        &self.rooms[&coord]
    }

    /// Replace the room at `coord`.
    pub fn set(&mut self, coord: Coord, room: Room) {
        self.rooms.insert(coord, room);
    }

    /// Number of generated rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn coords(&self) -> impl Iterator<Item = &Coord> {
        self.rooms.keys()
    }
}
