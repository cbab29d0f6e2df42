//! Cumulative standings over several stages.
//!
//! Two stages combine category by category. Only categories present in both
//! stages survive, and within a category only competitors scored in both
//! stages survive. Folding more stages left to right therefore keeps exactly
//! the competitors scored in every stage, with course metrics summed.

use super::clock;
use super::ranker::{self, rank, Timed};
use super::validity::{is_valid, STATUS_OK};
use crate::core::{
    AggregateEvent, Categories, Category, Error, EventInfo, Extra, RaceResult, StageDocument,
};

/// Combine two stages' categories.
///
/// Output follows the category order of `previous`.
pub fn merge(previous: &Categories, next: &Categories) -> Result<Categories, Error> {
    let mut merged = Categories::new();

    for (key, category) in previous {
        let Some(other) = next.get(key) else {
            log::debug!("Dropping category {key}: missing from next stage");
            continue;
        };
        merged.insert(key.clone(), merge_category(key, category, other)?);
    }

    for key in next.keys().filter(|key| !previous.contains_key(*key)) {
        log::debug!("Dropping category {key}: missing from previous stages");
    }

    Ok(merged)
}

fn merge_category(key: &str, previous: &Category, next: &Category) -> Result<Category, Error> {
    let joined = join_results(key, &previous.results, &next.results)?;

    let results = rank(joined)
        .into_iter()
        .map(|Timed { elapsed, mut result }| {
            result.time = Some(clock::format(elapsed));
            result
        })
        .collect();

    Ok(Category {
        name: key.to_string(),
        distance: previous.distance + next.distance,
        climb: previous.climb + next.climb,
        results,
        extra: Extra::new(),
    })
}

/// Pair each scored competitor of `previous` with their first scored
/// result of the same name in `next`.
fn join_results(
    category: &str,
    previous: &[RaceResult],
    next: &[RaceResult],
) -> Result<Vec<Timed>, Error> {
    let mut joined = Vec::new();

    for result in previous.iter().filter(|r| is_valid(r)) {
        let Some(other) = next
            .iter()
            .filter(|r| is_valid(r))
            .find(|r| r.name == result.name)
        else {
            log::debug!("{category}: dropping {}, not scored in next stage", result.name);
            continue;
        };

        let elapsed = ranker::elapsed(result, category)? + ranker::elapsed(other, category)?;
        joined.push(Timed::new(
            elapsed,
            RaceResult {
                position: 1,
                name: result.name.clone(),
                club: result.club.clone(),
                time: None,
                status: STATUS_OK.to_string(),
                ageclass: result.ageclass.clone(),
                extra: Extra::new(),
            },
        ));
    }

    Ok(joined)
}

/// Fold stages left to right. A single stage passes through untouched.
pub fn merge_all<I>(stages: I) -> Result<Categories, Error>
where
    I: IntoIterator<Item = Categories>,
{
    let mut stages = stages.into_iter();
    let first = stages.next().ok_or(Error::NoStages)?;

    let mut count = 1;
    let merged = stages.try_fold(first, |acc, stage| {
        count += 1;
        merge(&acc, &stage)
    })?;

    log::info!(
        "Folded {count} stage(s) into {} categor{}",
        merged.len(),
        if merged.len() == 1 { "y" } else { "ies" }
    );
    Ok(merged)
}

/// Combined standings document for a series of stage documents.
pub fn aggregate(info: EventInfo, stages: Vec<StageDocument>) -> Result<AggregateEvent, Error> {
    let categories = merge_all(stages.into_iter().map(|stage| stage.categories))?;
    Ok(AggregateEvent::new(info, categories))
}
