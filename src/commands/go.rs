use crate::commands::CommandResult;
use crate::commands::look::describe;
use crate::game::Game;
use crate::input::parser::Intent;
use crate::models::types::Direction;

pub fn go(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(arg) = intent.arg(0) else {
        ctx.output.line("Go where?");
        return Ok(());
    };
    let Some(dir) = Direction::parse(arg) else {
        ctx.output.line("I don't understand that direction.");
        return Ok(());
    };

    let pos = ctx.player.position;
    if !ctx.world.get(pos).exits.get(dir) {
        ctx.output.line("You can't go that way.");
        return Ok(());
    }

    if let Some(verse) = ctx.player.track_go_west(dir, ctx.catalog.go_west.len()) {
        ctx.output.line(ctx.catalog.go_west[verse].as_str());
    }

    let to = pos.step(dir);
    tracing::debug!(from = %pos, %to, "player moved");
    ctx.player.moved_to(to);
    describe(ctx, None)
}
