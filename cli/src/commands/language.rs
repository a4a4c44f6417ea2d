use color_eyre::eyre::Result;
use glaze_prefs::validation::validate_language;
use glaze_prefs::{DocumentSurface, LanguageStore, Preferences};

use super::print_json;
use crate::cli::LanguageCommands;

pub fn run<D: DocumentSurface>(
    prefs: &mut Preferences<D>,
    command: Option<LanguageCommands>,
    compact: bool,
) -> Result<()> {
    let store = prefs.language_mut()?;

    match command.unwrap_or(LanguageCommands::Show) {
        LanguageCommands::Show => return print_json(&store.state(), compact),
        LanguageCommands::List => {
            print_catalog(store);
            return Ok(());
        }
        LanguageCommands::Set { code, force } => {
            if !force {
                validate_language(store.available_languages(), &code)?;
            }
            store.change_language(&code);
        }
        LanguageCommands::Toggle => store.toggle_language(),
    }

    print_summary(store);
    Ok(())
}

fn print_summary<D: DocumentSurface>(store: &LanguageStore<D>) {
    let name = store
        .current_language()
        .map(|l| l.name.as_str())
        .unwrap_or("unlisted");
    println!(
        "Language: {} ({}), direction: {}",
        store.code(),
        name,
        store.direction().as_str()
    );
}

fn print_catalog<D: DocumentSurface>(store: &LanguageStore<D>) {
    println!("Available languages:");
    for language in store.available_languages() {
        let marker = if language.code == store.code() { "*" } else { " " };
        println!(
            " {} {:<6} {:<12} {:<12} {}",
            marker,
            language.code,
            language.name,
            language.native_name,
            language.direction().as_str()
        );
    }
}
