//! Static game data: items, recipes, biomes and the day cycle.
//!
//! The default catalog is compiled into the binary from `data/catalog.yaml`. An alternative
//! file with the same shape can be loaded at startup (see `Config::catalog_path`).

use crate::error::{AppResult, DomainError};
use crate::models::item::Item;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.yaml");

/// Number of phases of the day cycle that count as daylight.
pub const SUNNY_PHASES: usize = 9;

/// Turns spent in each phase of the day cycle.
pub const TURNS_PER_PHASE: u64 = 3;

/// Items the engine places or awards by name. A catalog must define all of them.
pub mod names {
    pub const STONE: &str = "some stone";
    pub const COAL: &str = "some coal";
    pub const IRON: &str = "some iron";
    pub const DIAMOND: &str = "some diamond";
    pub const DIRT: &str = "some dirt";
    pub const WOOD: &str = "some wood";
    pub const RIVER: &str = "a river";
    pub const CAVE_ENTRANCE: &str = "a cave entrance";
    pub const EXIT_TO_SURFACE: &str = "an exit to the surface";
    pub const TORCH: &str = "a torch";
    pub const TORCHES: &str = "some torches";

    pub const ALL: [&str; 11] = [
        STONE,
        COAL,
        IRON,
        DIAMOND,
        DIRT,
        WOOD,
        RIVER,
        CAVE_ENTRANCE,
        EXIT_TO_SURFACE,
        TORCH,
        TORCHES,
    ];
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Biome {
    /// Completes "You are standing ..."
    pub description: String,
    #[serde(default)]
    pub trees: bool,
    /// Stone is always present on the surface here
    #[serde(default)]
    pub stone: bool,
    /// Rivers may appear here
    #[serde(default = "yes")]
    pub rivers: bool,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    biomes: Vec<Biome>,
    day_cycle: Vec<String>,
    #[serde(default)]
    animals: Vec<String>,
    #[serde(default)]
    monsters: Vec<String>,
    #[serde(default)]
    starting_inventory: Vec<String>,
    #[serde(default)]
    go_west: Vec<String>,
    #[serde(default)]
    recipes: BTreeMap<String, Vec<String>>,
    items: BTreeMap<String, Item>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub biomes: Vec<Biome>,
    pub day_cycle: Vec<String>,
    pub animals: Vec<String>,
    pub monsters: Vec<String>,
    pub starting_inventory: Vec<String>,
    pub go_west: Vec<String>,
    recipes: BTreeMap<String, Vec<String>>,
    items: BTreeMap<String, Item>,
}

impl Catalog {
    /// The catalog that ships with the game.
    pub fn embedded() -> AppResult<Self> {
        Self::from_yaml(EMBEDDED_CATALOG)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(data)?;

        let mut items = file.items;
        for (name, item) in items.iter_mut() {
            item.name = name.clone();
        }

        let catalog = Self {
            biomes: file.biomes,
            day_cycle: file.day_cycle,
            animals: file.animals,
            monsters: file.monsters,
            starting_inventory: file.starting_inventory,
            go_west: file.go_west,
            recipes: file.recipes,
            items,
        };
        catalog.validate()?;

        tracing::debug!(
            items = catalog.items.len(),
            recipes = catalog.recipes.len(),
            biomes = catalog.biomes.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> AppResult<()> {
        if self.biomes.is_empty() {
            return Err(DomainError::Validation {
                field: "biomes",
                message: "at least one biome is required".into(),
            });
        }
        if self.day_cycle.is_empty() {
            return Err(DomainError::Validation {
                field: "day_cycle",
                message: "at least one phase is required".into(),
            });
        }

        let referenced = self
            .animals
            .iter()
            .chain(self.monsters.iter())
            .chain(self.starting_inventory.iter())
            .map(String::as_str)
            .chain(names::ALL.iter().map(|n| *n))
            .chain(self.recipes.keys().map(String::as_str))
            .chain(self.recipes.values().flatten().map(String::as_str))
            .chain(
                self.items
                    .values()
                    .flat_map(|i| i.drops.iter().chain(i.hit_drops.iter()))
                    .map(String::as_str),
            );
        for name in referenced {
            if !self.items.contains_key(name) {
                return Err(DomainError::InvalidCatalog(format!("'{name}' is referenced but not defined")));
            }
        }

        for item in self.items.values() {
            if item.tool && (item.tool_type.is_none() || !(1..=4).contains(&item.tool_level)) {
                return Err(DomainError::InvalidCatalog(format!(
                    "tool '{}' needs a tool_type and a tool_level between 1 and 4",
                    item.name
                )));
            }
            if item.ore && item.tool_type.is_none() {
                return Err(DomainError::InvalidCatalog(format!("ore '{}' needs a tool_type", item.name)));
            }
        }

        Ok(())
    }

    /// Look up an item by its exact catalog name.
    pub fn item(&self, name: &str) -> AppResult<&Item> {
        self.items.get(name).ok_or_else(|| DomainError::UnknownItem(name.to_string()))
    }

    /// Look up an item by name or alias.
    pub fn find_item(&self, noun: &str) -> Option<&Item> {
        self.items.get(noun).or_else(|| self.items.values().find(|i| i.answers_to(noun)))
    }

    /// Resolve a recipe by the output's name or alias. Returns the output and its inputs.
    pub fn recipe(&self, noun: &str) -> Option<(&Item, &[String])> {
        if let Some((name, inputs)) = self.recipes.get_key_value(noun) {
            return self.items.get(name).map(|item| (item, inputs.as_slice()));
        }

        self.recipes.iter().find_map(|(name, inputs)| {
            self.items
                .get(name)
                .filter(|item| item.answers_to(noun))
                .map(|item| (item, inputs.as_slice()))
        })
    }

    /// Phase of the day cycle for the given turn.
    pub fn day_phase(&self, turn: u64) -> usize {
        ((turn / TURNS_PER_PHASE) % self.day_cycle.len() as u64) as usize
    }

    pub fn day_phrase(&self, turn: u64) -> &str {
        &self.day_cycle[self.day_phase(turn)]
    }

    pub fn is_sunny(&self, turn: u64) -> bool {
        self.day_phase(turn) < SUNNY_PHASES
    }
}
