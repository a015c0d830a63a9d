//! Parsing of human-readable countdown lengths like `25m` or `1h30m`

use std::time::Duration;

/// Why a duration string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("expected a number at {0:?}")]
    MissingNumber(String),
    #[error("missing unit after {0}")]
    MissingUnit(u64),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("duration too large")]
    Overflow,
}

/// Parse a sequence of `<integer><unit>` groups, units `h`, `m`, `s`, `ms`.
///
/// The bare string `0` is accepted as a zero-length countdown.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(DurationError::MissingNumber(rest.to_string()));
        }
        let value: u64 = rest[..digits].parse().map_err(|_| DurationError::Overflow)?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let part = match unit {
            "" => return Err(DurationError::MissingUnit(value)),
            "h" => value.checked_mul(3600).map(Duration::from_secs),
            "m" => value.checked_mul(60).map(Duration::from_secs),
            "s" => Some(Duration::from_secs(value)),
            "ms" => Some(Duration::from_millis(value)),
            other => return Err(DurationError::UnknownUnit(other.to_string())),
        }
        .ok_or(DurationError::Overflow)?;

        total = total.checked_add(part).ok_or(DurationError::Overflow)?;
    }

    Ok(total)
}
