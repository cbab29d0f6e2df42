//! Result aggregation and re-ranking.
//!
//! - [`clock`]: clock text to seconds and back
//! - [`validity`]: which results count
//! - [`ranker`]: order by time and assign positions
//! - [`merge`]: cumulative standings across stages
//! - [`courses`]: class results regrouped per course

pub mod clock;
pub mod courses;
pub mod merge;
pub mod ranker;
pub mod validity;

pub use courses::{regroup, Gender};
pub use merge::{aggregate, merge, merge_all};
pub use ranker::{rank, Timed};
pub use validity::{is_valid, STATUS_OK};
