//! Regroup class categories by the physical course they ran.
//!
//! Classes sharing a gender marker, distance and climb ran the same course.
//! Each course gets a code `<gender>:<index>`, indexed per gender from the
//! longest course down, and a fresh ranking over all of its scored results.

use super::ranker::{rank, Timed};
use super::validity::is_valid;
use crate::core::{Categories, Category, Error, Extra, Measure, RaceResult, StageDocument};
use indexmap::IndexMap;

/// Gender markers, in the order courses are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Dames
    D,
    /// Heren
    H,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::D, Gender::H];

    pub fn marker(self) -> char {
        match self {
            Self::D => 'D',
            Self::H => 'H',
        }
    }

    /// Gender marker of a class name, taken from its first character.
    pub fn of_class(name: &str) -> Option<Self> {
        match name.chars().next() {
            Some('D') => Some(Self::D),
            Some('H') => Some(Self::H),
            _ => None,
        }
    }

    /// Course code for the 1-based `index` of this gender's courses.
    pub fn course_code(self, index: usize) -> String {
        format!("{}:{:02}", self.marker(), index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CourseKey {
    marker: Option<char>,
    distance: Measure,
    climb: Measure,
}

impl CourseKey {
    fn of(category: &Category) -> Self {
        Self {
            marker: category.name.chars().next(),
            distance: category.distance,
            climb: category.climb,
        }
    }
}

/// Replace an event's class categories with course categories.
///
/// Every other field of the document is carried over unchanged. Classes
/// whose name does not start with a known gender marker are dropped.
pub fn regroup(event: StageDocument) -> Result<StageDocument, Error> {
    let StageDocument { extra, categories } = event;

    let mut grouped: IndexMap<CourseKey, Vec<RaceResult>> = IndexMap::new();
    for category in categories.into_values() {
        let key = CourseKey::of(&category);
        if Gender::of_class(&category.name).is_none() {
            log::debug!("Dropping class {:?}: no gender marker", category.name);
        }
        grouped.entry(key).or_default().extend(category.results);
    }

    let mut courses = Categories::new();
    for gender in Gender::ALL {
        let mut keys: Vec<CourseKey> = grouped
            .keys()
            .filter(|key| key.marker == Some(gender.marker()))
            .copied()
            .collect();
        // Stable: equal distances keep first-seen order
        keys.sort_by(|a, b| b.distance.cmp(&a.distance));

        for (index, key) in keys.into_iter().enumerate() {
            let code = gender.course_code(index + 1);
            let results = grouped.shift_remove(&key).unwrap_or_default();
            let course = build_course(&code, key, results)?;
            log::trace!("{code}: {} ranked result(s)", course.results.len());
            courses.insert(code, course);
        }
    }

    log::info!("Regrouped classes into {} course(s)", courses.len());
    Ok(StageDocument {
        extra,
        categories: courses,
    })
}

fn build_course(code: &str, key: CourseKey, results: Vec<RaceResult>) -> Result<Category, Error> {
    let timed = results
        .into_iter()
        .filter(is_valid)
        .map(|result| Timed::from_result(result, code))
        .collect::<Result<Vec<_>, _>>()?;

    let results = rank(timed)
        .into_iter()
        .map(|Timed { mut result, .. }| {
            result.ageclass = None;
            result
        })
        .collect();

    Ok(Category {
        name: code.to_string(),
        distance: key.distance,
        climb: key.climb,
        results,
        extra: Extra::new(),
    })
}
