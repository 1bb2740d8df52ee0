use std::time::Duration;

use super::types::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(super) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let digits_len = value.chars().take_while(|ch| ch.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    // A bare number means seconds.
    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => Duration::from_secs(scale_secs(number, SECS_PER_MIN)?),
        "h" => Duration::from_secs(scale_secs(number, SECS_PER_HOUR)?),
        other => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: other.to_owned(),
            }));
        }
    };

    if duration.as_millis() == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(duration)
}

fn scale_secs(number: u64, factor: u64) -> AppResult<u64> {
    number
        .checked_mul(factor)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))
}
