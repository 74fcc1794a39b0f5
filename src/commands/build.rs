use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;

pub fn build(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Build what?");
        return Ok(());
    };
    let Some(material) = intent.arg(1) else {
        ctx.output.line(format!("Build {what} out of what?"));
        return Ok(());
    };

    let Some(item) = ctx.player.find_item(material).cloned() else {
        ctx.output.line(format!("You don't have {material}."));
        return Ok(());
    };
    if !item.material {
        ctx.output.line(format!("You can't build anything out of {}.", item.name));
        return Ok(());
    }

    if !item.infinite {
        ctx.player.remove_item(&item.name);
    }
    ctx.output.line(format!("You build {what} out of {}.", item.name));
    Ok(())
}
