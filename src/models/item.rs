use crate::models::types::ToolType;
use serde::Deserialize;

fn yes() -> bool {
    true
}

/// Catalog definition of an item. Rooms and the inventory hold copies; gameplay never mutates them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Catalog key, which is also the display name (e.g. "a wooden pickaxe")
    #[serde(skip)]
    pub name: String,

    /// Full description shown by `look at`
    #[serde(default)]
    pub desc: String,

    /// Alternative nouns the player may use (e.g. ["pickaxe", "pick"])
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default = "yes")]
    pub droppable: bool,
    /// Too heavy to carry
    #[serde(default)]
    pub heavy: bool,

    #[serde(default)]
    pub creature: bool,
    #[serde(default)]
    pub monster: bool,
    #[serde(default)]
    pub nocturnal: bool,
    /// Items added to the inventory when the creature is killed
    #[serde(default)]
    pub drops: Vec<String>,
    /// Items added to the inventory every time the creature is hit (it survives)
    #[serde(default)]
    pub hit_drops: Vec<String>,

    #[serde(default)]
    pub material: bool,
    #[serde(default)]
    pub food: bool,

    /// Must be mined with a tool of `tool_type` and at least `tool_level`
    #[serde(default)]
    pub ore: bool,
    /// Never removed from a room when taken or mined
    #[serde(default)]
    pub infinite: bool,

    #[serde(default)]
    pub tool: bool,
    #[serde(default)]
    pub tool_level: u8,
    #[serde(default)]
    pub tool_type: Option<ToolType>,
}

impl Item {
    /// True when `noun` is the catalog name or one of the aliases.
    pub fn answers_to(&self, noun: &str) -> bool {
        self.name.eq_ignore_ascii_case(noun) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(noun))
    }

    pub fn is_tool_of(&self, kind: ToolType) -> bool {
        self.tool && self.tool_type == Some(kind)
    }
}
