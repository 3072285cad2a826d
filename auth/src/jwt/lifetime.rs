use chrono::Duration;

use super::errors::LifetimeError;

/// Parse a token lifetime such as `30s`, `15m`, `12h`, `7d` or `2w`.
///
/// A bare integer is read as seconds. Zero lifetimes are rejected.
///
/// # Errors
/// * `MissingAmount` - No leading digits
/// * `UnknownUnit` - Suffix is not one of s, m, h, d, w
/// * `Zero` - Lifetime of zero length
/// * `OutOfRange` - Amount does not fit a duration
pub fn parse_lifetime(value: &str) -> Result<Duration, LifetimeError> {
    let trimmed = value.trim();
    let split_at = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (amount, unit) = trimmed.split_at(split_at);

    if amount.is_empty() {
        return Err(LifetimeError::MissingAmount(value.to_string()));
    }

    let amount: i64 = amount
        .parse()
        .map_err(|_| LifetimeError::OutOfRange(value.to_string()))?;

    let unit_seconds: i64 = match unit.trim() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        other => {
            return Err(LifetimeError::UnknownUnit {
                value: value.to_string(),
                unit: other.to_string(),
            })
        }
    };

    if amount == 0 {
        return Err(LifetimeError::Zero(value.to_string()));
    }

    amount
        .checked_mul(unit_seconds)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| LifetimeError::OutOfRange(value.to_string()))
}
