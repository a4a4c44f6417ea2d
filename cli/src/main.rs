mod cli;
mod commands;
mod config;
mod logging;
mod storage;

use clap::Parser;
use color_eyre::eyre::Result;
use glaze_prefs::{Document, Preferences};
use tracing::debug;

use cli::{Cli, Commands, PreferenceCommand};
use config::{ensure_dirs, LogLevel, UserConfig};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = ensure_dirs();

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);
    let _guard = logging::init(config.log_level, cli.log_to, log_level_override);

    config.merge_with_args(cli.storage);
    debug!(storage = config.storage.label(), "configuration loaded");

    match cli.command.unwrap_or(Commands::Status).into_preference() {
        Ok(command) => {
            let store = storage::open(config.storage)?;
            let mut prefs =
                Preferences::mount(store, config.preferences_config(), Document::new());
            run_preferences(&mut prefs, command, cli.compact)
        }
        Err(Commands::Config { path, reset, edit }) => commands::config::run(path, reset, edit),
        Err(Commands::Storage { command }) => {
            let store = storage::open(config.storage)?;
            commands::storage::run(&store, config.storage, command, cli.compact)
        }
        Err(command) => color_eyre::eyre::bail!("Unhandled command: {:?}", command),
    }
}

fn run_preferences(
    prefs: &mut Preferences,
    command: PreferenceCommand,
    compact: bool,
) -> Result<()> {
    match command {
        PreferenceCommand::Status => commands::status::run(&*prefs, compact),
        PreferenceCommand::Theme(command) => commands::theme::run(prefs, command, compact),
        PreferenceCommand::Lang(command) => commands::language::run(prefs, command, compact),
        PreferenceCommand::Background(command) => {
            commands::background::run(prefs, command, compact)
        }
    }
}
