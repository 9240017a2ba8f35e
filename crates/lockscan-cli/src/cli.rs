//! CLI argument definitions for lockscan.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lockscan",
    version,
    about = "Scan package-manager lock files and reconstruct dependency trees"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List locked packages as a flat list in lock-file order
    Scan {
        /// Path to a composer.lock file or a directory containing one.
        /// Defaults to searching upward from the current directory.
        path: Option<PathBuf>,
    },

    /// Print the reconstructed dependency tree
    Tree {
        /// Path to a composer.lock file or a directory containing one.
        /// Defaults to searching upward from the current directory.
        path: Option<PathBuf>,
        /// Maximum tree depth to display
        #[arg(short, long)]
        depth: Option<usize>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
