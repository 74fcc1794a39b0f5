//! break / mine / attack
//!
//! All three verbs end up in [`strike`], which works out what is being hit and with what:
//! trees, the player, ore and creatures each have their own rules.

use crate::commands::{CommandResult, capitalize};
use crate::game::Game;
use crate::input::parser::Intent;
use crate::models::item::Item;
use crate::models::types::ToolType;

pub fn cbreak(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg(0) else {
        ctx.output.line("Break what?");
        return Ok(());
    };
    let Some(tool) = named_tool(ctx, intent.arg(1)) else {
        return Ok(());
    };

    strike(ctx, target, tool)
}

pub fn mine(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg(0) else {
        ctx.output.line("Mine what?");
        return Ok(());
    };

    let tool = match intent.arg(1) {
        Some(_) => match named_tool(ctx, intent.arg(1)) {
            Some(tool) => tool,
            None => return Ok(()),
        },
        None => match ctx.player.best_tool(ToolType::Pick) {
            Some(pick) => Some(pick.clone()),
            None => {
                ctx.output.line(format!("Mine {target} with what?"));
                return Ok(());
            }
        },
    };

    strike(ctx, target, tool)
}

pub fn attack(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(target) = intent.arg(0) else {
        ctx.output.line("Attack what?");
        return Ok(());
    };
    let Some(tool) = named_tool(ctx, intent.arg(1)) else {
        return Ok(());
    };

    strike(ctx, target, tool)
}

/// Resolve an optional tool name against the inventory.
///
/// `None` means the player named something they don't carry and has already been told so.
/// `Some(None)` means bare hands.
fn named_tool(ctx: &mut Game, name: Option<&str>) -> Option<Option<Item>> {
    let Some(name) = name else {
        return Some(None);
    };

    match ctx.player.find_item(name) {
        Some(item) => Some(Some(item.clone())),
        None => {
            ctx.output.line(format!("You're not carrying {name}."));
            None
        }
    }
}

fn strike(ctx: &mut Game, target: &str, tool: Option<Item>) -> CommandResult {
    match target {
        "tree" | "trees" | "a tree" => {
            let wood = ctx.catalog.item(crate::catalog::names::WOOD)?.clone();
            ctx.player.add_item(&wood);
            ctx.output.line("The tree breaks into blocks of wood, which you pick up.");
            return Ok(());
        }
        "self" | "myself" => {
            ctx.output.fatal("You have died.");
            ctx.end();
            return Ok(());
        }
        _ => {}
    }

    let pos = ctx.player.position;
    let Some(item) = ctx.world.get(pos).find_item(target).cloned() else {
        ctx.output.line(format!("You don't see any {target} here."));
        return Ok(());
    };

    if item.ore {
        break_ore(ctx, &item, tool)
    } else if item.creature {
        fight(ctx, &item, tool)
    } else {
        ctx.output.line(format!("You can't break {}.", item.name));
        Ok(())
    }
}

fn break_ore(ctx: &mut Game, ore: &Item, tool: Option<Item>) -> CommandResult {
    let Some(tool) = tool else {
        ctx.output.line("You need a tool to break this ore.");
        return Ok(());
    };
    if !tool.tool {
        ctx.output.line(format!("You can't break {} with {}.", ore.name, tool.name));
        return Ok(());
    }
    if tool.tool_type != ore.tool_type {
        ctx.output.line("You need a different kind of tool to break this ore.");
        return Ok(());
    }
    if tool.tool_level < ore.tool_level {
        ctx.output.line(format!("{} is not strong enough to break this ore.", capitalize(&tool.name)));
        return Ok(());
    }

    if !ore.infinite {
        let pos = ctx.player.position;
        let mut room = ctx.world.get(pos).clone();
        room.remove_item(&ore.name);
        ctx.world.set(pos, room);
    }
    ctx.player.add_item(ore);

    ctx.output.line(format!("The ore breaks, dropping {}, which you pick up.", ore.name));
    Ok(())
}

fn fight(ctx: &mut Game, creature: &Item, tool: Option<Item>) -> CommandResult {
    if !creature.monster {
        return hunt(ctx, creature);
    }

    let sword = tool
        .filter(|t| t.is_tool_of(ToolType::Sword))
        .or_else(|| ctx.player.best_tool(ToolType::Sword).cloned());

    if let Some(sword) = sword {
        let pos = ctx.player.position;
        let mut room = ctx.world.get(pos).clone();
        room.remove_item(&creature.name);
        ctx.world.set(pos, room);

        ctx.output.line(format!("You slay {} with {}.", creature.name, sword.name));
        tracing::debug!(monster = %creature.name, sword = %sword.name, "monster slain");
        return Ok(());
    }

    if ctx.player.injured {
        ctx.output.line("You are too hurt to fight.");
        return Ok(());
    }

    ctx.player.injured = true;
    ctx.output.line(format!(
        "You hit {} with your bare hands, but it fights back. You are injured.",
        creature.name
    ));
    Ok(())
}

/// Animals never fight back. Some shed drops and stay, the rest are killed.
fn hunt(ctx: &mut Game, animal: &Item) -> CommandResult {
    let source = if animal.hit_drops.is_empty() { &animal.drops } else { &animal.hit_drops };

    // Resolve every drop before touching any state
    let drops = source
        .iter()
        .map(|name| ctx.catalog.item(name).cloned())
        .collect::<Result<Vec<_>, _>>()?;

    if animal.hit_drops.is_empty() {
        let pos = ctx.player.position;
        let mut room = ctx.world.get(pos).clone();
        room.remove_item(&animal.name);
        ctx.world.set(pos, room);
    }

    for drop in &drops {
        ctx.player.add_item(drop);
    }

    let names: Vec<&str> = drops.iter().map(|d| d.name.as_str()).collect();
    match (animal.hit_drops.is_empty(), names.is_empty()) {
        (false, _) => ctx.output.line(format!(
            "You hit {}. It drops {}, which you pick up.",
            animal.name,
            crate::output::itemize(&names)
        )),
        (true, true) => ctx.output.line(format!("You kill {}.", animal.name)),
        (true, false) => ctx.output.line(format!(
            "You kill {}. It drops {}, which you pick up.",
            animal.name,
            crate::output::itemize(&names)
        )),
    }
    Ok(())
}
