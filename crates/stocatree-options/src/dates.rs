//! Serde support for calendar-date fields.
//!
//! Simulation dates are stored as [`chrono::NaiveDate`] and dumped as native
//! TOML date values (`date_start = 1994-01-01`). On load, both the native
//! form and an ISO `"YYYY-MM-DD"` string are accepted; a full datetime is
//! accepted by taking its date component, so files written by older tooling
//! (`1994-01-01T00:00:00`) still parse.

use chrono::NaiveDate;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Error as SerError, Serialize, Serializer};
use toml::value::Datetime;

/// Serialize a date as a native TOML date value.
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let datetime: Datetime = date
        .format("%Y-%m-%d")
        .to_string()
        .parse()
        .map_err(S::Error::custom)?;
    datetime.serialize(serializer)
}

/// Deserialize a date from a native TOML date, datetime, or ISO string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Datetime(datetime) => from_toml_datetime(&datetime)
            .ok_or_else(|| D::Error::custom(format!("'{datetime}' has no calendar date part"))),
        // Dates pulled back out of a value tree arrive as plain strings,
        // so the string case speaks the full TOML datetime grammar.
        toml::Value::String(text) => text
            .parse::<Datetime>()
            .ok()
            .as_ref()
            .and_then(from_toml_datetime)
            .ok_or_else(|| D::Error::custom(format!("'{text}' is not a calendar date"))),
        other => Err(D::Error::custom(format!(
            "expected a calendar date, found {}",
            other.type_str()
        ))),
    }
}

fn from_toml_datetime(datetime: &Datetime) -> Option<NaiveDate> {
    let date = datetime.date?;
    NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
}
