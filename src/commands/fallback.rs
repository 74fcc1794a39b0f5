use crate::commands::CommandResult;
use crate::game::Game;

const NO_INPUT: &[&str] = &[
    "Say something.",
    "Cat got your tongue?",
    "Don't be shy, type something.",
    "I'm listening.",
];

const BAD_INPUT: &[&str] = &[
    "I don't understand.",
    "Come again?",
    "That doesn't make any sense.",
    "What do you mean?",
    "I have no idea what you're talking about.",
];

/// Empty line: nudge the player. Takes no turn.
pub fn no_input(ctx: &mut Game) -> CommandResult {
    let s = ctx.pick(NO_INPUT);
    ctx.output.system(s);
    Ok(())
}

/// Nothing in the pattern table matched. Takes no turn.
pub fn bad_input(ctx: &mut Game) -> CommandResult {
    let s = ctx.pick(BAD_INPUT);
    ctx.output.system(s);
    Ok(())
}
