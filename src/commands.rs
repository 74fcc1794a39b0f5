use crate::error::DomainError;
use crate::game::Game;
use crate::input::parser::{Intent, Verb, parse_command};
use thiserror::Error;

mod build;
mod cbreak;
mod craft;
mod dig;
mod drop;
mod eat;
mod fallback;
mod go;
mod inventory;
mod look;
mod place;
mod take;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("the session has ended")]
    SessionEnded,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one line of input and run it against the game.
///
/// Handlers either change state and report it, or print a refusal and change nothing. Every
/// gameplay intent that runs to completion takes one turn; empty and unrecognised input don't.
pub fn process_command(raw: &str, ctx: &mut Game) -> CommandResult {
    if !ctx.is_running() {
        return Err(CommandError::SessionEnded);
    }

    let intent = parse_command(raw);
    tracing::debug!(verb = %intent.verb, args = ?intent.args, "dispatching");

    dispatch(ctx, &intent)?;

    if !intent.verb.is_reserved() {
        ctx.player.tick();
    }
    Ok(())
}

fn dispatch(ctx: &mut Game, intent: &Intent) -> CommandResult {
    match intent.verb {
        Verb::NoInput => fallback::no_input(ctx),
        Verb::BadInput => fallback::bad_input(ctx),
        Verb::Wait => {
            ctx.output.line("Time passes...");
            Ok(())
        }
        Verb::Look => look::look(ctx, intent),
        Verb::Inventory => inventory::inventory(ctx),
        Verb::Go => go::go(ctx, intent),
        Verb::Dig => dig::dig(ctx, intent),
        Verb::Take => take::take(ctx, intent),
        Verb::Drop => drop::drop(ctx, intent),
        Verb::Place => place::place(ctx, intent),
        Verb::Break => cbreak::cbreak(ctx, intent),
        Verb::Mine => cbreak::mine(ctx, intent),
        Verb::Attack => cbreak::attack(ctx, intent),
        Verb::Craft => craft::craft(ctx, intent),
        Verb::Build => build::build(ctx, intent),
        Verb::Eat => eat::eat(ctx, intent),
        Verb::Help => {
            ctx.output.system(help_text());
            Ok(())
        }
        Verb::Exit => {
            ctx.output.system("Goodbye!");
            ctx.end();
            Ok(())
        }
    }
}

/// Describe the player's surroundings without taking a turn.
pub fn describe_room(ctx: &mut Game) -> CommandResult {
    look::describe(ctx, None)
}

/// "a torch" -> "A torch"
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn help_text() -> String {
    r#"Available commands
------------------
  look [at <thing>]              Look around, or at something
  go <direction>                 Move north, south, east, west, up or down
  dig <direction> [with <tool>]  Dig a passage (needs a pickaxe)
  take <thing>                   Pick something up
  drop <thing>                   Put something down
  place torch                    Light up a dark cave
  mine <ore> [with <tool>]       Mine ore with a pickaxe
  break <thing> [with <tool>]    Break trees, ore or yourself
  attack <creature> [with <tool>]
  craft <thing>                  Craft from the materials you carry
  build <thing> out of <material>
  eat <food>
  inventory                      Show what you are carrying
  wait                           Let time pass
  quit                           Leave the game"#
        .to_string()
}
