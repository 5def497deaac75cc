use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DPT - command line helpers for Docker project templates.
#[derive(Parser, Debug, Clone)]
#[command(name = "dpt", author, version, about, long_about = None)]
pub struct Args {
    /// Suppress non-error messages
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage 'dot env' files
    #[command(subcommand)]
    Env(EnvCommand),

    /// Print a greeting
    Greet {
        /// Name to greet
        name: String,

        /// Number of greetings
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum EnvCommand {
    /// List all 'dot env' files in a directory and its subdirectories
    List {
        /// Directory to list files from
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Print entries as JSON instead of a listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Remove all '.env' files in a directory and its subdirectories
    Remove {
        /// Directory to remove files from
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Do not ask for confirmation
        #[arg(short, long, default_value_t = false)]
        yes: bool,

        /// Show what would be removed without removing anything
        #[arg(short = 'n', long, default_value_t = false)]
        dry_run: bool,
    },

    /// Create '.env' files from their '.env.example' templates
    Init {
        /// Directory to initialize files in
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Overwrite existing '.env' files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be created without writing anything
        #[arg(short = 'n', long, default_value_t = false)]
        dry_run: bool,
    },
}
