mod background;
mod language;
mod storage;
mod theme;

pub use background::{BackgroundArgs, BackgroundCommands, GradientKindArg, ModeArg};
pub use language::LanguageCommands;
pub use storage::StorageCommands;
pub use theme::{ThemeArg, ThemeCommands};

use clap::{Parser, Subcommand};

use crate::config::StorageBackend;
use crate::logging::LogMode;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every preference at once (default)
    #[command(alias = "show")]
    Status,

    /// Show or change light/dark mode
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },

    /// Show or change the active language
    #[command(alias = "language")]
    Lang {
        #[command(subcommand)]
        command: Option<LanguageCommands>,
    },

    /// Show or change the dashboard background
    #[command(alias = "bg")]
    Background {
        #[command(subcommand)]
        command: Option<BackgroundCommands>,
    },

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// Inspect the persisted preference entries
    Storage {
        #[command(subcommand)]
        command: Option<StorageCommands>,
    },
}

/// Commands that run against mounted preference stores.
#[derive(Debug)]
pub enum PreferenceCommand {
    Status,
    Theme(Option<ThemeCommands>),
    Lang(Option<LanguageCommands>),
    Background(Option<BackgroundCommands>),
}

impl Commands {
    /// Splits off the commands that need mounted preferences; the rest are
    /// handed back unchanged.
    pub fn into_preference(self) -> Result<PreferenceCommand, Commands> {
        match self {
            Commands::Status => Ok(PreferenceCommand::Status),
            Commands::Theme { command } => Ok(PreferenceCommand::Theme(command)),
            Commands::Lang { command } => Ok(PreferenceCommand::Lang(command)),
            Commands::Background { command } => Ok(PreferenceCommand::Background(command)),
            other => Err(other),
        }
    }
}

/// Theme, language and background preferences for glaze dashboards
#[derive(Debug, Parser)]
#[command(name = "glaze", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Where log output goes
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Stderr)]
    pub log_to: LogMode,

    /// Storage backend (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageBackend>,

    /// Print JSON on a single line
    #[arg(short, long, global = true)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_status() {
        let cli = Cli::try_parse_from(["glaze"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_to, LogMode::Stderr);
    }

    #[test]
    fn background_set_parses_lists() {
        let cli = Cli::try_parse_from([
            "glaze",
            "bg",
            "set",
            "--mode",
            "animated",
            "--stops",
            "#000,#fff",
            "--custom-set",
            "#111,#222",
            "--custom-set",
            "#333,#444",
            "--angle",
            "-30",
        ])
        .unwrap();

        let Some(Commands::Background {
            command: Some(BackgroundCommands::Set(args)),
        }) = cli.command
        else {
            panic!("expected background set");
        };
        assert_eq!(args.mode, Some(ModeArg::AnimatedGradient));
        assert_eq!(args.stops, Some(vec!["#000".to_string(), "#fff".to_string()]));
        assert_eq!(args.custom_sets, vec!["#111,#222", "#333,#444"]);
        assert_eq!(args.angle, Some(-30.0));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["glaze", "lang", "toggle", "--storage", "memory", "-c"])
            .unwrap();
        assert_eq!(cli.storage, Some(StorageBackend::Memory));
        assert!(cli.compact);
        assert!(matches!(
            cli.command,
            Some(Commands::Lang {
                command: Some(LanguageCommands::Toggle)
            })
        ));
    }

    #[test]
    fn preference_commands_are_split_off() {
        assert!(matches!(
            Commands::Status.into_preference(),
            Ok(PreferenceCommand::Status)
        ));
        assert!(matches!(
            Commands::Theme {
                command: Some(ThemeCommands::Toggle)
            }
            .into_preference(),
            Ok(PreferenceCommand::Theme(Some(ThemeCommands::Toggle)))
        ));
        assert!(matches!(
            Commands::Storage { command: None }.into_preference(),
            Err(Commands::Storage { command: None })
        ));
        assert!(matches!(
            Commands::Config {
                path: true,
                reset: false,
                edit: false
            }
            .into_preference(),
            Err(Commands::Config { path: true, .. })
        ));
    }

    #[test]
    fn theme_set_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["glaze", "theme", "set", "sepia"]).is_err());
    }
}
