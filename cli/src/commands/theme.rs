use color_eyre::eyre::Result;
use glaze_prefs::{DocumentSurface, Preferences, ThemeStore};

use super::print_json;
use crate::cli::ThemeCommands;

pub fn run<D: DocumentSurface>(
    prefs: &mut Preferences<D>,
    command: Option<ThemeCommands>,
    compact: bool,
) -> Result<()> {
    let store = prefs.theme_mut()?;

    match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => return print_json(&store.state(), compact),
        ThemeCommands::Toggle => store.toggle(),
        ThemeCommands::Set { mode } => store.set_mode(mode.into()),
    }

    print_summary(store);
    Ok(())
}

fn print_summary(store: &ThemeStore) {
    println!("Theme: {}", store.mode().label());
}
