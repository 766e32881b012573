//! Timestamps stamped into store records.

use chrono::{DateTime, Utc};

/// Formats `at` as ISO 8601 UTC with microseconds and a trailing `Z`,
/// e.g. `2025-11-22T18:43:12.482913Z`.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_microseconds_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2025, 11, 22, 18, 43, 12).unwrap();
        assert_eq!(utc_timestamp(at), "2025-11-22T18:43:12.000000Z");
    }
}
