use crate::core::RaceResult;

/// Status code of a competitor who finished and was not disqualified.
pub const STATUS_OK: &str = "OK";

/// True when the result was actually scored: ranked and status `OK`.
pub fn is_valid(result: &RaceResult) -> bool {
    result.position > 0 && result.status == STATUS_OK
}
