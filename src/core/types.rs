use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

/// Largest float that still converts to an integer without loss.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Course length or climb as found in a result document.
///
/// Exports are inconsistent about numbers: the same field may arrive as
/// `8`, `8.5` or `"8"`. Whole values serialize back as integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Measure(f64);

impl Measure {
    pub fn new(value: f64) -> Self {
        // -0.0 and 0.0 must share one grouping key
        Self(value + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    fn is_whole(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER
    }
}

impl From<i32> for Measure {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Measure {
    type Output = Measure;

    fn add(self, rhs: Self) -> Self::Output {
        Measure::new(self.0 + rhs.0)
    }
}

impl PartialEq for Measure {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Measure {}

impl Hash for Measure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Measure {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Measure {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: f64 = number_or_text(deserializer)?;
        if !value.is_finite() {
            return Err(de::Error::custom(format!("measure must be finite, got {value}")));
        }
        Ok(Measure::new(value))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Accept a number either as a JSON number or as its decimal text.
fn number_or_text<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr + Deserialize<'de> + Debug,
    T::Err: Display,
    D: Deserializer<'de>,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => T::from_str(s.trim()).map_err(de::Error::custom),
    }
}

/// Vendor fields a document carries beyond the ones racemerge reads.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// One competitor's line in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// 1-based rank; zero or negative means not ranked.
    #[serde(deserialize_with = "number_or_text")]
    pub position: i64,
    pub name: String,
    pub club: String,
    /// Clock text; absent for competitors without a time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ageclass: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl RaceResult {
    pub fn new(
        position: i64,
        name: impl Into<String>,
        club: impl Into<String>,
        time: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            club: club.into(),
            time: Some(time.into()),
            status: status.into(),
            ageclass: None,
            extra: Extra::new(),
        }
    }

    pub fn with_ageclass(mut self, ageclass: impl Into<String>) -> Self {
        self.ageclass = Some(ageclass.into());
        self
    }
}

/// A named group of results run over one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub distance: Measure,
    pub climb: Measure,
    pub results: Vec<RaceResult>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        distance: impl Into<Measure>,
        climb: impl Into<Measure>,
        results: Vec<RaceResult>,
    ) -> Self {
        Self {
            name: name.into(),
            distance: distance.into(),
            climb: climb.into(),
            results,
            extra: Extra::new(),
        }
    }
}

/// Category key to category, in document order.
pub type Categories = IndexMap<String, Category>;

/// A result document for one stage.
///
/// Fields besides `categories` are kept untouched so a rewritten document
/// carries them through in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDocument {
    #[serde(flatten)]
    pub extra: Extra,
    pub categories: Categories,
}

impl StageDocument {
    pub fn new(categories: Categories) -> Self {
        Self {
            extra: Extra::new(),
            categories,
        }
    }
}

/// Combined standings over several stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEvent {
    pub date: String,
    pub name: String,
    pub location: String,
    pub categories: Categories,
}

/// Caller supplied metadata for an aggregate document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub date: String,
    pub name: String,
    pub location: String,
}

impl AggregateEvent {
    pub fn new(info: EventInfo, categories: Categories) -> Self {
        Self {
            date: info.date,
            name: info.name,
            location: info.location,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_fields_accept_text() {
        let json = indoc! {r#"
            {
                "name": "H21",
                "distance": "8",
                "climb": 120.5,
                "results": [
                    {"position": "3", "name": "Jan", "club": "Omega",
                     "time": "00:41:10", "status": "OK"}
                ]
            }
        "#};
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.distance, Measure::from(8));
        assert_eq!(category.climb.value(), 120.5);
        assert_eq!(category.results[0].position, 3);
        assert_eq!(category.results[0].ageclass, None);
    }

    #[test]
    fn test_non_numeric_position_is_rejected() {
        let json = r#"{"position": "first", "name": "Jan", "club": "Omega",
                       "time": null, "status": "OK"}"#;
        assert!(serde_json::from_str::<RaceResult>(json).is_err());
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let json = r#"{"position": 1, "name": "Jan", "club": "Omega", "time": "00:10:00"}"#;
        let err = serde_json::from_str::<RaceResult>(json).unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_measure_serializes_whole_values_as_integers() {
        let json = serde_json::to_string(&(Measure::from(22), Measure::from(5.4))).unwrap();
        assert_eq!(json, "[22,5.4]");
    }

    #[test]
    fn test_measure_zero_signs_share_a_key() {
        assert_eq!(Measure::new(-0.0), Measure::new(0.0));
    }

    #[test]
    fn test_non_finite_measure_is_rejected() {
        assert!(serde_json::from_str::<Measure>("\"NaN\"").is_err());
    }

    #[test]
    fn test_unknown_fields_are_carried_through() {
        let json = indoc! {r#"
            {
                "name": "H21",
                "distance": 8.5,
                "climb": 120,
                "course": "A",
                "results": [
                    {"position": 0, "name": "Jan", "club": "Omega",
                     "status": "DNS", "bib": 17}
                ]
            }
        "#};
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.extra["course"], "A");
        assert_eq!(category.results[0].time, None);
        assert_eq!(category.results[0].extra["bib"], 17);

        let out = serde_json::to_string(&category).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"{"name":"H21","distance":8.5,"climb":120,"results":["#,
                r#"{"position":0,"name":"Jan","club":"Omega","status":"DNS","bib":17}"#,
                r#"],"course":"A"}"#
            )
        );
    }

    #[test]
    fn test_stage_document_keeps_extra_fields_in_order() {
        let json = indoc! {r#"
            {
                "name": "Sprint",
                "date": "2024-05-04",
                "categories": {},
                "location": "Gent"
            }
        "#};
        let document: StageDocument = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = document.extra.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "date", "location"]);

        let out = serde_json::to_string(&document).unwrap();
        assert_eq!(
            out,
            r#"{"name":"Sprint","date":"2024-05-04","location":"Gent","categories":{}}"#
        );
    }
}
