use crate::catalog::names;
use crate::commands::CommandResult;
use crate::commands::drop::drop_item;
use crate::game::Game;
use crate::input::parser::Intent;

pub fn place(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Place what?");
        return Ok(());
    };

    if matches!(what, "torch" | "a torch" | "torches" | "some torches") {
        return place_torch(ctx);
    }

    drop_item(ctx, what)
}

/// Put a torch in the room, taking it from the single torch or the stack.
fn place_torch(ctx: &mut Game) -> CommandResult {
    if !ctx.player.has_item(names::TORCHES) && !ctx.player.has_item(names::TORCH) {
        ctx.output.line("You don't have torches.");
        return Ok(());
    }

    let torch = ctx.catalog.item(names::TORCH)?.clone();
    let pos = ctx.player.position;
    let mut room = ctx.world.get(pos).clone();

    ctx.player.remove_item(names::TORCH);
    room.add_item(&torch);

    if room.dark {
        room.dark = false;
        ctx.output.line("The cave lights up under the torchflame.");
    } else if pos.is_surface() && !ctx.is_sunny() {
        ctx.output.line("The night gets a little brighter.");
    } else {
        ctx.output.line("Placed.");
    }

    ctx.world.set(pos, room);
    Ok(())
}
