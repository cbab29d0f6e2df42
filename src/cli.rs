use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "racemerge")]
#[command(about = "Combine multi-stage race results and regroup results by course", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show progress
    /// -vv: Show dropped categories and competitors
    /// -vvv: Show all trace information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// When to color terminal output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the configured format, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show only the first N results per category (markdown and terminal only)
    #[arg(long = "top", visible_alias = "head")]
    pub top: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum results of several stages into cumulative standings
    Merge {
        /// Stage result documents, in stage order
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Date of the combined event
        #[arg(long)]
        date: Option<String>,

        /// Name of the combined event
        #[arg(long)]
        name: Option<String>,

        /// Location of the combined event
        #[arg(long)]
        location: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Regroup one event's class results by course
    Courses {
        /// Result document organized by class
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize a racemerge configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Log filter for a `-v` count.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
