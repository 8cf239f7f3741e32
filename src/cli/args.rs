//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect sysexits.h exit codes and exit with them
#[derive(Parser, Debug)]
#[command(name = "rsexit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all sysexits codes
    List,

    /// Show name, value and meaning of a code
    Explain {
        /// Numeric code or name: 0 or 64-78 (64, EX_USAGE, usage)
        code: String,
    },

    /// Exit with the code of a wrapped error
    Exit {
        /// Error category (usage=64, os=71, config=78)
        #[arg(value_enum, required_unless_present = "code")]
        category: Option<Category>,

        /// Arbitrary exit code instead of a category; outside 0-255 exits with 70
        #[arg(long, conflicts_with = "category", allow_negative_numbers = true)]
        code: Option<i32>,

        /// Error message; without it the wrapped error is absent and the exit status is 0
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Usage,
    Os,
    Config,
}
