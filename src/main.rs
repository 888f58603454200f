use clap::Parser;
use draughtsman::prelude::*;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

mod cli;
mod console;

use cli::Options;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = Options::parse();

    // Flush on every write so log lines interleave properly with the human player's prompts.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::Direct)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Detailed)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    print_header();

    if let Err(e) = play(&options)
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}

/// Plays a single match or a tournament, as configured.
fn play(options: &Options) -> Result<()>
{
    if options.games <= 1
    {
        let light = options.strategy(options.light, 0)?;
        let dark = options.strategy(options.dark, 1)?;

        let mut coordinator = MatchCoordinator::new(light, dark, options.move_limit);
        coordinator.run();

        log::info!("final position:\n{}", coordinator.board());
        log::info!("{}", coordinator.summary());
        return Ok(());
    }

    let mut salts = (0u64..).step_by(2);
    let mut salts_dark = (1u64..).step_by(2);

    let standings = Tournament::new(options.games, options.move_limit).play(
        || options.strategy(options.light, salts.next().unwrap_or_default()),
        || options.strategy(options.dark, salts_dark.next().unwrap_or_default()),
    )?;

    for standing in standings
    {
        log::info!("{}", standing);
    }

    Ok(())
}

fn print_header()
{
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
