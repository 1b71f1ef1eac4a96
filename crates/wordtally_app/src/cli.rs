//! Command-line arguments.
//!
//! Every command that needs text takes it as an optional positional
//! argument and prompts for it on stdin otherwise.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "wordtally",
    version,
    about = "Count words and letters, and score words in Scrabble points"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Print results as a single JSON object.
    #[arg(long, global = true)]
    pub json: bool,
    /// RON config file (defaults to ./wordtally.ron when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the hello message.
    Hello,
    /// Greet someone by name.
    Greet { name: Option<String> },
    /// Count one letter in a word, ignoring case.
    Beans {
        word: Option<String>,
        /// Letter to count (defaults to the configured letter).
        #[arg(short, long)]
        letter: Option<String>,
    },
    /// Count the words and letters of a sentence.
    Wc { sentence: Option<String> },
    /// Score a word in Scrabble points.
    Scrabble { word: Option<String> },
}
