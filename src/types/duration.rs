// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of Kubernetes (Go style) duration strings such as `1m` or `1h30m`.

use crate::error::{Result, SecretCopierError};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<number>\d+(?:\.\d+)?)(?P<unit>ns|us|µs|ms|s|m|h)")
        .expect("duration unit regex is valid")
});

/// Largest duration a Go `time.Duration` can hold (about 2562047h)
const MAX_DURATION_SECS: f64 = i64::MAX as f64 / 1e9;

/// Parse a duration string into a [`Duration`].
///
/// Accepts one or more `<number><unit>` groups, where unit is one of
/// `ns`, `us`, `µs`, `ms`, `s`, `m` or `h`. A bare `0` is zero. Negative
/// durations are accepted and clamp to zero. Values beyond what a Go
/// duration can hold are rejected.
pub fn parse_duration(value: &str) -> Result<Duration> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(SecretCopierError::InvalidDuration(
            "duration string cannot be empty".to_string(),
        ));
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body == "0" {
        return Ok(Duration::ZERO);
    }

    let invalid = || {
        SecretCopierError::InvalidDuration(format!(
            "'{}' (expected e.g. '30s', '1m', '1h30m')",
            trimmed
        ))
    };

    let mut consumed = 0;
    let mut seconds = 0f64;

    for captures in UNIT_REGEX.captures_iter(body) {
        let whole = captures.get(0).ok_or_else(invalid)?;
        if whole.start() != consumed {
            return Err(invalid());
        }
        consumed = whole.end();

        let number: f64 = captures["number"].parse().map_err(|_| invalid())?;
        let scale = match &captures["unit"] {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(invalid()),
        };
        seconds += number * scale;
    }

    if consumed == 0 || consumed != body.len() {
        return Err(invalid());
    }

    if negative {
        return Ok(Duration::ZERO);
    }

    if seconds > MAX_DURATION_SECS {
        return Err(SecretCopierError::InvalidDuration(format!(
            "'{}' is out of range",
            trimmed
        )));
    }

    Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
}
