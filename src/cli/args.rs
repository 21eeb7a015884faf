//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Course-seat allocator: ranked WebTree preferences under capacity limits and class-year priority
#[derive(Parser, Debug)]
#[command(name = "webtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate seats from a WebTree request export and print the assignment
    Run {
        /// CSV file with WebTree request rows
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Seed for the scheduling permutations (omit for an entropy seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print allocation metrics after the assignment
        #[arg(long)]
        evaluate: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
