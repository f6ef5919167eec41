//! CLI command definitions and dispatch for the `swapwise` binary.
//!
//! Uses clap derive macros for argument parsing. The directory lives only in
//! process memory, so each invocation bootstraps the platform, runs one
//! command against it, and exits.

pub mod demo;
pub mod profiles;
pub mod skills;

mod render;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Swap skills with other members of the community.
#[derive(Parser)]
#[command(name = "swapwise", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted platform walkthrough.
    Demo,

    /// Browse public member profiles.
    Profiles {
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: usize,

        /// Profiles per page (defaults to the configured page size).
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Search the skill catalog.
    Skills {
        /// Substring to match, case-insensitively.
        query: String,
    },

    /// Print the full skill catalog grouped by category.
    Catalog,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
