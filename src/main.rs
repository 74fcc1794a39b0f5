use cavern::commands::{CommandError, describe_room};
use cavern::config::Config;
use cavern::{Game, process_command};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "cavern", version, about = "A small text adventure in an endless blocky world")]
struct Args {
    /// World seed, for a reproducible map
    #[arg(long)]
    seed: Option<u64>,

    /// Alternative YAML catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = Config::from_env(args.config.as_deref())?;
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.catalog.is_some() {
        cfg.catalog_path = args.catalog;
    }
    if args.no_color {
        cfg.color = false;
    }

    init_tracing(&cfg.log_filter)?;

    let mut game = Game::from_config(&cfg)?;
    tracing::info!(seed = ?cfg.seed, "session started");

    // Show where we are before the first prompt
    describe_room(&mut game)?;
    flush(&mut game, cfg.color)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while game.is_running() {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            game.end();
            break;
        };

        match process_command(&line, &mut game) {
            Ok(()) => {}
            Err(CommandError::SessionEnded) => break,
            Err(e) => {
                tracing::error!(error = %e, input = %line, "command failed");
                game.output.system("Something went wrong.");
            }
        }
        flush(&mut game, cfg.color)?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn flush(game: &mut Game, color: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for frame in game.output.drain() {
        writeln!(stdout, "{}", frame.render(color))?;
    }
    stdout.flush()
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!(e))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
