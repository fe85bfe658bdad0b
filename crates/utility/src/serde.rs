/// (De)serialization of backend timestamps. The backend emits naive ISO 8601
/// date-times (`2025-07-21T14:03:11.250`) but proxies in front of it may add an
/// offset, in which case the wall-clock time of that offset is kept.
pub mod date_time {
    use core::fmt;

    use chrono::{DateTime, NaiveDateTime};
    use schemars::gen::SchemaGenerator;
    use schemars::schema::{InstanceType, Schema, SchemaObject};
    use serde::{
        de::{self, Unexpected, Visitor},
        Deserializer, Serializer,
    };

    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
            return Some(date_time.naive_local());
        }
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    }

    pub fn serialize<S>(
        date_time: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date_time.format("%Y-%m-%dT%H:%M:%S%.f").to_string();
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateTimeVisitor;

        impl<'de> Visitor<'de> for DateTimeVisitor {
            type Value = NaiveDateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO 8601 date-time string")
            }

            fn visit_str<E>(self, value: &str) -> Result<NaiveDateTime, E>
            where
                E: de::Error,
            {
                parse(value).ok_or_else(|| {
                    de::Error::invalid_value(Unexpected::Str(value), &self)
                })
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }

    pub fn schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            format: Some("date-time".to_owned()),
            ..Default::default()
        }
        .into()
    }

    #[cfg(test)]
    mod tests {
        use chrono::{NaiveDate, NaiveDateTime};
        use serde::{Deserialize, Serialize};

        use super::parse;

        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "super")]
            at: NaiveDateTime,
        }

        fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, s)
                .unwrap()
        }

        #[test]
        fn parses_naive_timestamps() {
            assert_eq!(
                parse("2025-07-21T14:03:11"),
                Some(at(2025, 7, 21, 14, 3, 11))
            );
            assert_eq!(
                parse("2025-07-21 14:03:11"),
                Some(at(2025, 7, 21, 14, 3, 11))
            );
            let fractional = parse("2025-07-21T14:03:11.250").unwrap();
            assert_eq!(fractional.date(), NaiveDate::from_ymd_opt(2025, 7, 21).unwrap());
        }

        #[test]
        fn keeps_wall_clock_of_offset_timestamps() {
            // 23:30 in Sao Paulo is already the next day in UTC.
            assert_eq!(
                parse("2025-07-21T23:30:00-03:00"),
                Some(at(2025, 7, 21, 23, 30, 0))
            );
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!(parse("yesterday"), None);
            assert!(serde_json::from_str::<Wrapper>(r#"{"at":"21/07/2025"}"#).is_err());
        }

        #[test]
        fn serializes_without_offset() {
            let wrapper = Wrapper {
                at: at(2025, 7, 22, 8, 0, 0),
            };
            assert_eq!(
                serde_json::to_string(&wrapper).unwrap(),
                r#"{"at":"2025-07-22T08:00:00"}"#
            );
        }
    }
}
