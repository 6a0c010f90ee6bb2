use std::time::Duration;

use carousel_core::constants::timing;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a duration written either as bare milliseconds (`"250"`) or in
/// humantime form (`"250ms"`, `"5s"`, `"1m 30s"`).
pub fn parse_duration(raw: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = raw.trim();
    if let Ok(millis) = trimmed.parse::<u64>() {
        return Ok(Duration::from_millis(millis));
    }
    humantime::parse_duration(trimmed)
}

/// Parse an autoplay option. Boolean forms switch autoplay off or on at the
/// default interval; anything else must be a duration.
pub fn parse_autoplay(
    raw: &str,
) -> Result<Option<Duration>, humantime::DurationError> {
    match parse_bool(raw) {
        Some(false) => Ok(None),
        Some(true) => Ok(Some(timing::AUTOPLAY_INTERVAL)),
        None => parse_duration(raw).map(Some),
    }
}

pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn durations_accept_millis_and_humantime() {
        assert_eq!(parse_duration("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(
            parse_duration("1m 30s").unwrap(),
            Duration::from_secs(90)
        );
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn autoplay_switches() {
        assert_eq!(parse_autoplay("off").unwrap(), None);
        assert_eq!(
            parse_autoplay("on").unwrap(),
            Some(timing::AUTOPLAY_INTERVAL)
        );
        assert_eq!(
            parse_autoplay("3s").unwrap(),
            Some(Duration::from_secs(3))
        );
    }
}
