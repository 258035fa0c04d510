use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

pub fn datetime_to_string(datetime: DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}
