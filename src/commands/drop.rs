use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;

pub fn drop(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Drop what?");
        return Ok(());
    };

    drop_item(ctx, what)
}

/// Move a carried item into the current room.
pub(crate) fn drop_item(ctx: &mut Game, what: &str) -> CommandResult {
    let Some(item) = ctx.player.find_item(what).cloned() else {
        ctx.output.line(format!("You don't have {what}."));
        return Ok(());
    };

    if !item.droppable {
        ctx.output.line("You can't drop that.");
        return Ok(());
    }

    let pos = ctx.player.position;
    let mut room = ctx.world.get(pos).clone();
    room.add_item(&item);
    ctx.player.remove_item(&item.name);
    ctx.world.set(pos, room);

    ctx.output.line("Dropped.");
    Ok(())
}
