pub mod iso8601 {
    //! (de)serializers for the instants of a scenario payload. accepts RFC 3339
    //! with a `Z` or numeric offset, and reads timestamps without an offset as
    //! UTC. always writes UTC with a `Z` suffix.
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::model::time_ops;

    const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, String> {
        let trimmed = value.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(datetime.with_timezone(&Utc));
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(|date| time_ops::start_of_day(&date))
            .map_err(|e| format!("'{value}' is not an ISO-8601 timestamp: {e}"))
    }

    pub fn format_utc(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let datetime_str: String = String::deserialize(deserializer)?;
        parse_utc(&datetime_str).map_err(D::Error::custom)
    }

    pub fn serialize_utc<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_utc(value))
    }
}

pub mod flight {
    //! parsing for the scheduled departure dates of flight records. the
    //! emissions datasets carry plain dates, sometimes with a time component
    //! which is discarded.
    use chrono::{NaiveDate, NaiveDateTime};

    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"];
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse_departure_date(value: &str) -> Result<NaiveDate, String> {
        let trimmed = value.trim();
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(date);
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(datetime.date());
            }
        }
        Err(format!(
            "expected one of {} (optionally with a time)",
            DATE_FORMATS.join(", ")
        ))
    }
}

#[cfg(test)]
mod test {
    use super::{flight, iso8601};
    use chrono::NaiveDate;

    #[test]
    fn test_parse_utc_accepts_z_offset_and_naive() {
        let z = iso8601::parse_utc("2024-03-01T09:00:00Z").expect("should parse Z suffix");
        let offset =
            iso8601::parse_utc("2024-03-01T10:00:00+01:00").expect("should parse offset");
        let naive = iso8601::parse_utc("2024-03-01T09:00:00").expect("should parse naive");
        assert_eq!(z, offset);
        assert_eq!(z, naive);
        assert_eq!(iso8601::format_utc(&z), "2024-03-01T09:00:00Z");
    }

    #[test]
    fn test_parse_utc_rejects_garbage() {
        assert!(iso8601::parse_utc("next tuesday").is_err());
    }

    #[test]
    fn test_parse_departure_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 2).expect("test invariant failed");
        for value in ["2024-03-02", "20240302", "02/03/2024", "2024-03-02 17:45:00"] {
            let parsed = flight::parse_departure_date(value)
                .unwrap_or_else(|e| panic!("failed to parse '{value}': {e}"));
            assert_eq!(parsed, expected, "for input '{value}'");
        }
        assert!(flight::parse_departure_date("").is_err());
    }
}
