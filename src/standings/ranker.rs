use super::clock::{self, Seconds};
use crate::core::{Error, RaceResult};

/// A result together with its elapsed time in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed {
    pub elapsed: Seconds,
    pub result: RaceResult,
}

impl Timed {
    pub fn new(elapsed: Seconds, result: RaceResult) -> Self {
        Self { elapsed, result }
    }

    /// Read the elapsed time from the result's clock text.
    pub fn from_result(result: RaceResult, category: &str) -> Result<Self, Error> {
        let elapsed = elapsed(&result, category)?;
        Ok(Self::new(elapsed, result))
    }
}

/// Elapsed seconds of a result; `category` only labels the error.
pub fn elapsed(result: &RaceResult, category: &str) -> Result<Seconds, Error> {
    match result.time.as_deref() {
        Some(text) => Ok(clock::parse(text)?),
        None => Err(Error::missing_time(&result.name, category)),
    }
}

/// Order by elapsed time and number positions 1..=n.
///
/// Equal times keep their input order; no other tie-break is applied.
pub fn rank(entries: Vec<Timed>) -> Vec<Timed> {
    let mut indexed: Vec<(usize, Timed)> = entries.into_iter().enumerate().collect();
    indexed.sort_by(|(index_a, a), (index_b, b)| {
        a.elapsed
            .total_cmp(&b.elapsed)
            .then_with(|| index_a.cmp(index_b))
    });

    indexed
        .into_iter()
        .zip(1..)
        .map(|((_, mut entry), position)| {
            entry.result.position = position;
            entry
        })
        .collect()
}
