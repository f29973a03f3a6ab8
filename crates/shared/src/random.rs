use rand::Rng;
use thiserror::Error;

/// Conventional bounds used by nodes that just need a fresh seed value.
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100_000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid range: min ({min}) is greater than max ({max})")]
pub struct InvalidRange {
    pub min: i64,
    pub max: i64,
}

/// Uniform random integer in `[min, max]`, inclusive of both bounds.
///
/// `min > max` is a contract violation and fails fast instead of delegating
/// undefined behavior to the generator.
pub fn random_int(min: i64, max: i64) -> Result<i64, InvalidRange> {
    if min > max {
        return Err(InvalidRange { min, max });
    }

    Ok(rand::rng().random_range(min..=max))
}

/// `random_int` with the conventional `1..=100_000` bounds.
pub fn random_int_default() -> i64 {
    rand::rng().random_range(DEFAULT_MIN..=DEFAULT_MAX)
}
