use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum LanguageCommands {
    /// Print the current language and direction (default)
    Show,

    /// Switch to a language code
    Set {
        code: String,

        /// Accept codes that are not in the configured catalog
        #[arg(short, long)]
        force: bool,
    },

    /// Move to the next configured language
    #[command(alias = "t")]
    Toggle,

    /// List configured languages
    #[command(alias = "ls")]
    List,
}
