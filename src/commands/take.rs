use crate::catalog::names;
use crate::commands::CommandResult;
use crate::game::Game;
use crate::input::parser::Intent;

pub fn take(ctx: &mut Game, intent: &Intent) -> CommandResult {
    let Some(what) = intent.arg(0) else {
        ctx.output.line("Take what?");
        return Ok(());
    };

    let pos = ctx.player.position;
    let mut room = ctx.world.get(pos).clone();

    let Some(item) = room.find_item(what).cloned() else {
        ctx.output.line(format!("You don't see any {what} here."));
        return Ok(());
    };

    if item.heavy {
        ctx.output.line(format!("You can't carry {}.", item.name));
        return Ok(());
    }
    if item.ore {
        ctx.output.line("You need to mine this ore.");
        return Ok(());
    }

    if !item.infinite {
        room.remove_item(&item.name);
    }
    ctx.player.add_item(&item);

    // A single torch is folded into a stack of torches
    if ctx.player.has_item(names::TORCHES) {
        ctx.player.remove_item(names::TORCH);
    }

    if item.name == names::TORCH && pos.is_underground() {
        room.dark = true;
        ctx.output.line("The cave plunges into darkness.");
    } else {
        ctx.output.line("Taken.");
    }

    ctx.world.set(pos, room);
    Ok(())
}
