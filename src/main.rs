use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use pocketkit::cli::Cli;
use pocketkit::utils::output::configure_color;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = cli.resolve_config()?;
    configure_color(config.general.color);

    // Bare invocation prints help and succeeds
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    command.execute(&config)?;

    Ok(())
}

/// Logs go to stderr so stdout only carries command output. The level comes
/// from `--debug`, not from the environment.
fn init_logging(debug: bool) {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
