// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod standings;

// Re-export commonly used types
pub use crate::core::{
    AggregateEvent, Categories, Category, Error, EventInfo, FormatError, Measure, RaceResult,
    StageDocument,
};

pub use crate::standings::{
    aggregate, clock, is_valid, merge, merge_all, rank, regroup, Gender, Timed,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Standings};
