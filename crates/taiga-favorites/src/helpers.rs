//! Row parsing helpers.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::FavoritesError;

/// Parse a TEXT timestamp column.
///
/// Accepts RFC 3339 (as written by this crate) and `SQLite`'s
/// `datetime('now')` format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `FavoritesError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, FavoritesError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| FavoritesError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Fixed-width UTC timestamp, so TEXT ordering matches time ordering.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_formats() {
        let a = parse_datetime("2026-02-09T14:30:00.000000Z").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(FavoritesError::Query(_))
        ));
    }

    #[test]
    fn timestamps_have_fixed_width() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2026-02-09T14:30:00.000000Z".len());
        assert!(ts.ends_with('Z'));
    }
}
