use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;

pub fn eat(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Eat what?");
        return Ok(());
    };

    let Some(food) = ctx.player.find_item(what).cloned() else {
        ctx.output.line(format!("You don't have {what}."));
        return Ok(());
    };
    if !food.food {
        ctx.output.line(format!("You can't eat {}.", food.name));
        return Ok(());
    }

    ctx.player.remove_item(&food.name);
    if ctx.player.injured {
        ctx.player.injured = false;
        ctx.output.line(format!("You eat {}. You feel better.", food.name));
    } else {
        ctx.output.line(format!("You eat {}.", food.name));
    }
    Ok(())
}
