use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "A small user registry that reports expected failures as values")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Registers a new user
    Add {
        first_name: String,
        last_name: String,
        username: String,
        /// Password for the new account
        #[arg(long, short = 'p', value_name = "PASSWORD")]
        password: String,
    },

    /// Lists registered users
    List {
        /// Filter users containing text (case-insensitive)
        #[arg(long, short = 's', value_name = "TERM")]
        search: Option<String>,
        /// Disable colors
        #[arg(long)]
        no_color: bool,
    },

    /// Removes a user
    Remove { username: String },

    /// Recover the registry from the backup file
    Recover {
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}
