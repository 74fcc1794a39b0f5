use crate::models::item::Item;
use crate::models::types::{Coord, Direction, ToolType};
use std::collections::BTreeMap;

/// Number of turns during which a first "go west" still starts the song.
pub const GO_WEST_GRACE_TURNS: u64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoWest {
    /// Still listening; holds the number of consecutive west moves so far
    Armed(usize),
    /// Tripped for good
    Disarmed,
}

/// Everything about the player. Rooms never point back at it; it only refers to them by coordinate.
#[derive(Debug)]
pub struct Session {
    // When is the session started/created
    pub session_started: std::time::Instant,

    /// Where am I (on the map)?
    pub position: Coord,
    /// Carried items, keyed by catalog name
    pub inventory: BTreeMap<String, Item>,

    /// Number of executed actions
    pub turn: u64,
    /// Number of actions since entering the current room
    pub time_in_room: u64,
    pub injured: bool,

    go_west: GoWest,
}

impl Session {
    pub fn new(position: Coord) -> Self {
        Self {
            session_started: std::time::Instant::now(),
            position,
            inventory: BTreeMap::new(),
            turn: 0,
            time_in_room: 0,
            injured: false,
            go_west: GoWest::Armed(0),
        }
    }

    /// Find a carried item by name or alias.
    pub fn find_item(&self, noun: &str) -> Option<&Item> {
        self.inventory
            .get(noun)
            .or_else(|| self.inventory.values().find(|i| i.answers_to(noun)))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains_key(name)
    }

    pub fn add_item(&mut self, item: &Item) {
        self.inventory.insert(item.name.clone(), item.clone());
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.inventory.remove(name)
    }

    pub fn item_names(&self) -> Vec<String> {
        self.inventory.keys().cloned().collect()
    }

    /// Highest level carried tool of the given kind.
    pub fn best_tool(&self, kind: ToolType) -> Option<&Item> {
        self.inventory
            .values()
            .filter(|i| i.is_tool_of(kind))
            .max_by_key(|i| i.tool_level)
    }

    pub fn go_west(&self) -> GoWest {
        self.go_west
    }

    /// Feed a movement attempt to the "go west" song. Returns the verse to sing, if any.
    pub fn track_go_west(&mut self, dir: Direction, verses: usize) -> Option<usize> {
        let GoWest::Armed(count) = self.go_west else {
            return None;
        };

        if count == 0 && self.turn > GO_WEST_GRACE_TURNS {
            self.go_west = GoWest::Disarmed;
            return None;
        }

        if dir != Direction::West {
            if count > 0 {
                self.go_west = GoWest::Disarmed;
            }
            return None;
        }

        if verses == 0 {
            return None;
        }
        self.go_west = GoWest::Armed(count + 1);
        Some(count % verses)
    }

    /// Called once after every executed action.
    pub fn tick(&mut self) {
        self.turn += 1;
        self.time_in_room += 1;
    }

    pub fn moved_to(&mut self, position: Coord) {
        self.position = position;
        self.time_in_room = 0;
    }
}
