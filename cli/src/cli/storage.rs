use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum StorageCommands {
    /// Print where preferences are stored (default)
    Path,

    /// Print every persisted entry
    Dump,

    /// Delete every persisted entry
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
