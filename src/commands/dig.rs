use crate::catalog::names;
use crate::commands::CommandResult;
use crate::commands::look::describe;
use crate::game::Game;
use crate::input::parser::Intent;
use crate::models::types::{BEDROCK_Y, Direction, SURFACE_Y, ToolType};

pub fn dig(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(arg) = intent.arg(0) else {
        ctx.output.line("Dig where?");
        return Ok(());
    };
    let Some(dir) = Direction::parse(arg) else {
        ctx.output.line("I don't understand that direction.");
        return Ok(());
    };

    let pos = ctx.player.position;
    if dir == Direction::Up && pos.y >= SURFACE_Y {
        ctx.output.line("You can't dig that way.");
        return Ok(());
    }
    if dir == Direction::Down && pos.y <= BEDROCK_Y {
        ctx.output.line("You hit bedrock.");
        return Ok(());
    }

    let tool = match intent.arg(1) {
        Some(name) => match ctx.player.find_item(name) {
            Some(tool) => Some(tool.clone()),
            None => {
                ctx.output.line(format!("You're not carrying {name}."));
                return Ok(());
            }
        },
        None => ctx.player.best_tool(ToolType::Pick).cloned(),
    };

    let mut here = ctx.world.get(pos).clone();
    let to = pos.step(dir);

    if here.exits.get(dir) {
        // Nothing to dig, just walk through.
        ctx.player.moved_to(to);
        return describe(ctx, None);
    }

    let Some(tool) = tool.filter(|t| t.is_tool_of(ToolType::Pick)) else {
        ctx.output.line("You need to use a pickaxe to dig through stone.");
        return Ok(());
    };

    let stone = ctx.catalog.item(names::STONE)?.clone();
    let dirt = ctx.catalog.item(names::DIRT)?.clone();
    let cave_entrance = ctx.catalog.item(names::CAVE_ENTRANCE)?.clone();
    let exit_to_surface = ctx.catalog.item(names::EXIT_TO_SURFACE)?.clone();

    // Crossing between the surface and the first cave layer
    let seam = dir.is_vertical() && pos.y.max(to.y) == SURFACE_Y;

    here.exits.set(dir, true);
    if seam {
        here.add_item(if dir == Direction::Down { &cave_entrance } else { &exit_to_surface });
    }
    ctx.world.set(pos, here);

    let mut there = ctx.world.get(to).clone();
    there.exits.set(dir.opposite(), true);
    if seam {
        there.add_item(if dir == Direction::Down { &exit_to_surface } else { &cave_entrance });
    }
    ctx.world.set(to, there);

    ctx.player.add_item(&stone);
    if seam {
        ctx.player.add_item(&dirt);
        ctx.output.line(format!("You dig {dir} using {} and collect some dirt and stone.", tool.name));
    } else {
        ctx.output.line(format!("You dig {dir} using {} and collect some stone.", tool.name));
    }

    tracing::debug!(from = %pos, %to, tool = %tool.name, "dug a passage");
    ctx.player.moved_to(to);
    describe(ctx, None)
}
