use crate::models::item::Item;
use crate::models::types::Direction;
use std::collections::BTreeMap;

/// Six independent exit flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exits {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub up: bool,
    pub down: bool,
}

impl Exits {
    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub fn set(&mut self, dir: Direction, open: bool) {
        match dir {
            Direction::North => self.north = open,
            Direction::South => self.south = open,
            Direction::East => self.east = open,
            Direction::West => self.west = open,
            Direction::Up => self.up = open,
            Direction::Down => self.down = open,
        }
    }

    /// Open exits in display order (north, south, west, east, up, down).
    pub fn open(&self) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|d| self.get(*d)).collect()
    }
}

/// A single generated location. Only ever created by the world generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    /// Index into the biome catalog; surface rooms only
    pub biome: Option<usize>,
    pub trees: bool,
    /// Underground rooms start dark until a torch is placed
    pub dark: bool,
    pub exits: Exits,
    /// Items lying here, keyed by catalog name
    pub items: BTreeMap<String, Item>,
}

impl Room {
    pub fn add_item(&mut self, item: &Item) {
        self.items.insert(item.name.clone(), item.clone());
    }

    /// Find an item lying here by name or alias.
    pub fn find_item(&self, noun: &str) -> Option<&Item> {
        self.items.get(noun).or_else(|| self.items.values().find(|i| i.answers_to(noun)))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    pub fn item_names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}
