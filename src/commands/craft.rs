use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;
use crate::output::itemize;

pub fn craft(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Craft what?");
        return Ok(());
    };

    let catalog = ctx.catalog.clone();
    let Some((output, inputs)) = catalog.recipe(what) else {
        ctx.output.line(format!("You don't know how to make {what}."));
        return Ok(());
    };

    let missing: Vec<&str> = inputs
        .iter()
        .map(String::as_str)
        .filter(|name| !ctx.player.has_item(name))
        .collect();
    if !missing.is_empty() {
        ctx.output.line(format!("You need {} to make {}.", itemize(&missing), output.name));
        return Ok(());
    }

    for name in inputs {
        let infinite = ctx.player.inventory.get(name).is_some_and(|i| i.infinite);
        if !infinite {
            ctx.player.remove_item(name);
        }
    }
    ctx.player.add_item(output);

    tracing::debug!(output = %output.name, ?inputs, "crafted");
    ctx.output.line(format!("You craft {}.", output.name));
    Ok(())
}
