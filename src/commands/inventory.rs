use crate::commands::CommandResult;
use crate::game::Game;
use crate::output::itemize;

pub fn inventory(ctx: &mut Game) -> CommandResult {
    let names = ctx.player.item_names();
    ctx.output.line(format!("You are carrying {}.", itemize(&names)));
    Ok(())
}
