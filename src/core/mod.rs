pub mod errors;
pub mod types;

pub use errors::{Error, FormatError, FormatIssue, Result};
pub use types::{
    AggregateEvent, Categories, Category, EventInfo, Extra, Measure, RaceResult, StageDocument,
};
