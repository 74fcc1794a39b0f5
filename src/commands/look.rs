use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;
use crate::output::itemize;

pub fn look(ctx: &mut Game, intent: &Intent) -> CommandResult {
    describe(ctx, intent.arg(0))
}

/// Describe the current room, or a single thing in it. A dark room shows nothing at all.
pub(crate) fn describe(ctx: &mut Game, target: Option<&str>) -> CommandResult {
    let pos = ctx.player.position;
    let room = ctx.world.get(pos).clone();

    if room.dark {
        ctx.output.line("It is pitch dark.");
        return Ok(());
    }

    let Some(target) = target else {
        let mut lines = Vec::new();

        if pos.is_surface() {
            let biome = room
                .biome
                .and_then(|idx| ctx.catalog.biomes.get(idx))
                .map(|b| b.description.as_str())
                .unwrap_or("somewhere");
            lines.push(format!(
                "You are standing {biome}. {}",
                ctx.catalog.day_phrase(ctx.player.turn)
            ));
        } else {
            let exits: Vec<&str> = room.exits.open().iter().map(|d| d.canonical()).collect();
            if exits.is_empty() {
                lines.push("You are underground.".to_string());
            } else {
                lines.push(format!("You are underground. You can travel {}.", itemize(&exits)));
            }
        }

        if !room.items.is_empty() {
            lines.push(format!("There is {} here.", itemize(&room.item_names())));
        }
        if room.trees {
            lines.push("There are trees here.".to_string());
        }

        ctx.output.room_view(lines.join("\n"));
        return Ok(());
    };

    let found = room.find_item(target).or_else(|| ctx.player.find_item(target));
    if let Some(item) = found {
        if item.desc.is_empty() {
            ctx.output.line(format!("You see nothing special about {}.", item.name));
        } else {
            ctx.output.line(item.desc.clone());
        }
    } else if room.trees && matches!(target, "tree" | "trees") {
        ctx.output.line("The trees look easy to break.");
    } else if matches!(target, "self" | "myself") {
        ctx.output.line(if ctx.player.injured {
            "You are bruised, but still very handsome."
        } else {
            "Very handsome."
        });
    } else {
        ctx.output.line(format!("You don't see any {target} here."));
    }

    Ok(())
}
