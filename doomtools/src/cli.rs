//! Root CLI structure for doomtools

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "doomtools")]
#[command(about = "Command-line tools for Doom-engine patch data", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// DeHackEd patch table operations
    Dehacked {
        #[command(subcommand)]
        command: crate::commands::dehacked::DehackedCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
