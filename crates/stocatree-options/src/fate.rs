//! Terminal fate tables.
//!
//! The raw options format writes terminal fate as a year-ordered list of
//! zone-labelled code sets. [`normalize`] folds that list into a single
//! lookup keyed by `(year, zone)`, counting years from 1 in list order.
//! The normalized table serializes as nested `year -> zone -> codes`
//! tables, and [`TerminalFate::from_value`] accepts either shape.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use toml::{Table, Value};

use crate::error::{Error, Result};

/// One year's worth of raw fate data: zone label to fate codes.
pub type FateLine = IndexMap<String, Vec<i64>>;

/// Normalized terminal fate lookup keyed by year number and zone label.
///
/// Entries keep insertion order. Inserting a key that is already present
/// replaces the stored codes; the later value wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalFate(IndexMap<(u32, String), Vec<i64>>);

/// Fold raw year-ordered fate lines into a [`TerminalFate`] lookup.
///
/// The first line becomes year 1, the second year 2, and so on. `None`
/// passes through unchanged. The fold consumes the list shape, so the
/// output cannot be fed back in as input.
pub fn normalize(raw: Option<Vec<FateLine>>) -> Option<TerminalFate> {
    raw.map(TerminalFate::from_lines)
}

impl TerminalFate {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_lines(lines: Vec<FateLine>) -> Self {
        let mut fate = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            let year = index as u32 + 1;
            for (zone, codes) in line {
                fate.insert(year, zone, codes);
            }
        }
        fate
    }

    /// Parse a raw options value into a normalized table.
    ///
    /// Accepts the list-of-lines shape and the nested `year -> zone ->
    /// codes` shape produced by serialization. Anything else fails with
    /// [`Error::MalformedFateTable`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(entries) => {
                let mut lines = Vec::with_capacity(entries.len());
                for (index, entry) in entries.into_iter().enumerate() {
                    let table = match entry {
                        Value::Table(table) => table,
                        other => {
                            return Err(Error::MalformedFateTable(format!(
                                "entry {index} is {}, expected a zone table",
                                other.type_str()
                            )))
                        }
                    };
                    let mut line = FateLine::new();
                    for (zone, codes) in table {
                        let codes = fate_codes(&zone, codes)?;
                        line.insert(zone, codes);
                    }
                    lines.push(line);
                }
                Ok(Self::from_lines(lines))
            }
            Value::Table(years) => Self::from_years(years),
            other => Err(Error::MalformedFateTable(format!(
                "expected a list of zone tables or a year-keyed table, found {}",
                other.type_str()
            ))),
        }
    }

    fn from_years(years: Table) -> Result<Self> {
        let mut fate = Self::new();
        for (key, entry) in years {
            let year: u32 = key.parse().map_err(|_| {
                Error::MalformedFateTable(format!("year key '{key}' is not a number"))
            })?;
            let zones = match entry {
                Value::Table(zones) => zones,
                other => {
                    return Err(Error::MalformedFateTable(format!(
                        "year {year} holds {}, expected a zone table",
                        other.type_str()
                    )))
                }
            };
            for (zone, codes) in zones {
                let codes = fate_codes(&zone, codes)?;
                fate.insert(year, zone, codes);
            }
        }
        Ok(fate)
    }

    /// Encode the table in its serialized `year -> zone -> codes` shape.
    pub fn to_value(&self) -> Result<Value> {
        Ok(Value::try_from(self)?)
    }

    /// Store `codes` under `(year, zone)`, returning any replaced codes.
    pub fn insert(
        &mut self,
        year: u32,
        zone: impl Into<String>,
        codes: Vec<i64>,
    ) -> Option<Vec<i64>> {
        let zone = zone.into();
        let previous = self.0.insert((year, zone.clone()), codes);
        if previous.is_some() {
            tracing::warn!(
                year,
                zone = zone.as_str(),
                "duplicate terminal fate entry, keeping the later codes"
            );
        }
        previous
    }

    /// Look up the codes for one year and zone.
    pub fn get(&self, year: u32, zone: &str) -> Option<&[i64]> {
        self.0
            .get(&(year, zone.to_string()))
            .map(Vec::as_slice)
    }

    /// Number of `(year, zone)` entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&(u32, String), &Vec<i64>)> {
        self.0.iter()
    }
}

fn fate_codes(zone: &str, value: Value) -> Result<Vec<i64>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::MalformedFateTable(format!(
                "codes for zone '{zone}' are {}, expected an integer list",
                other.type_str()
            )))
        }
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Integer(code) => Ok(code),
            other => Err(Error::MalformedFateTable(format!(
                "code for zone '{zone}' is {}, expected an integer",
                other.type_str()
            ))),
        })
        .collect()
}

impl Serialize for TerminalFate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut years: IndexMap<u32, Table> = IndexMap::new();
        for ((year, zone), codes) in &self.0 {
            let codes = Value::Array(codes.iter().map(|&code| Value::Integer(code)).collect());
            years
                .entry(*year)
                .or_insert_with(Table::new)
                .insert(zone.clone(), codes);
        }
        let mut map = serializer.serialize_map(Some(years.len()))?;
        for (year, zones) in &years {
            map.serialize_entry(&year.to_string(), zones)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(entries: &[(&str, &[i64])]) -> FateLine {
        entries
            .iter()
            .map(|(zone, codes)| (zone.to_string(), codes.to_vec()))
            .collect()
    }

    #[test]
    fn normalize_counts_years_from_one() {
        let raw = vec![line(&[("A", &[1, 2])]), line(&[("A", &[3]), ("B", &[4])])];
        let fate = normalize(Some(raw)).unwrap();

        assert_eq!(fate.len(), 3);
        assert_eq!(fate.get(1, "A"), Some(&[1, 2][..]));
        assert_eq!(fate.get(2, "A"), Some(&[3][..]));
        assert_eq!(fate.get(2, "B"), Some(&[4][..]));
        assert_eq!(fate.get(1, "B"), None);
    }

    #[test]
    fn normalize_keeps_insertion_order() {
        let raw = vec![line(&[("A", &[1, 2])]), line(&[("A", &[3]), ("B", &[4])])];
        let fate = normalize(Some(raw)).unwrap();

        let keys: Vec<_> = fate.iter().map(|((y, z), _)| (*y, z.as_str())).collect();
        assert_eq!(keys, [(1, "A"), (2, "A"), (2, "B")]);
    }

    #[test]
    fn normalize_passes_none_through() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn normalize_of_empty_list_is_empty() {
        let fate = normalize(Some(Vec::new())).unwrap();
        assert!(fate.is_empty());
    }

    #[test]
    fn insert_keeps_the_later_codes() {
        let mut fate = TerminalFate::new();
        assert_eq!(fate.insert(1, "trunk", vec![6]), None);
        assert_eq!(fate.insert(1, "trunk", vec![5, 5]), Some(vec![6]));
        assert_eq!(fate.get(1, "trunk"), Some(&[5, 5][..]));
        assert_eq!(fate.len(), 1);
    }

    fn value(text: &str) -> Value {
        let mut table: Table = text.parse().unwrap();
        table.remove("fate").unwrap()
    }

    #[test]
    fn from_value_accepts_the_list_shape() {
        let fate = TerminalFate::from_value(value(
            "fate = [{ trunk = [6, 6] }, { trunk = [5], medium = [4] }]",
        ))
        .unwrap();

        assert_eq!(fate.get(1, "trunk"), Some(&[6, 6][..]));
        assert_eq!(fate.get(2, "trunk"), Some(&[5][..]));
        assert_eq!(fate.get(2, "medium"), Some(&[4][..]));
    }

    #[test]
    fn from_value_accepts_the_serialized_shape() {
        let raw = vec![line(&[("trunk", &[6, 6])]), line(&[("medium", &[4])])];
        let fate = normalize(Some(raw)).unwrap();

        let encoded = fate.to_value().unwrap();
        let decoded = TerminalFate::from_value(encoded).unwrap();
        assert_eq!(decoded, fate);
    }

    #[test]
    fn from_value_rejects_zone_keys_at_year_level() {
        let err = TerminalFate::from_value(value("fate = { trunk = [1, 2] }")).unwrap_err();
        assert!(matches!(err, Error::MalformedFateTable(_)));
    }

    #[test]
    fn from_value_rejects_scalar_entries() {
        let err = TerminalFate::from_value(value("fate = [3]")).unwrap_err();
        assert!(matches!(err, Error::MalformedFateTable(_)));
    }

    #[test]
    fn from_value_rejects_scalar_codes() {
        let err = TerminalFate::from_value(value("fate = [{ trunk = 6 }]")).unwrap_err();
        assert!(matches!(err, Error::MalformedFateTable(_)));
    }

    #[test]
    fn from_value_rejects_non_integer_codes() {
        let err = TerminalFate::from_value(value("fate = [{ trunk = [1.5] }]")).unwrap_err();
        assert!(matches!(err, Error::MalformedFateTable(_)));
    }
}
