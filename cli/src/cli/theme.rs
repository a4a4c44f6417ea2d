use clap::{Subcommand, ValueEnum};
use glaze_prefs::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme (default)
    Show,

    /// Flip between light and dark
    #[command(alias = "t")]
    Toggle,

    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        mode: ThemeArg,
    },
}
