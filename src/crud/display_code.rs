use chrono::{DateTime, Datelike, Utc};

/// Derive a human-readable display code from a row's numeric id and
/// creation year: `<PREFIX><YY>-<zero-padded id>`.
///
/// The code is computed at read time and never stored, so the same stored
/// `id`/`created_at` always yields the same code.
pub fn display_code(prefix: &str, id: i32, created_at: DateTime<Utc>) -> String {
    format!("{prefix}{:02}-{id:04}", created_at.year() % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("WO", 7, 2025, "WO25-0007")]
    #[case("SPR", 1, 2024, "SPR24-0001")]
    #[case("SP", 9999, 2026, "SP26-9999")]
    #[case("WD", 12345, 2026, "WD26-12345")]
    fn formats_prefix_year_and_padded_sequence(
        #[case] prefix: &str,
        #[case] id: i32,
        #[case] year: i32,
        #[case] expected: &str,
    ) {
        let created_at = Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(display_code(prefix, id, created_at), expected);
    }

    #[test]
    fn recomputes_identically() {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            display_code("WI", 42, created_at),
            display_code("WI", 42, created_at)
        );
    }
}
