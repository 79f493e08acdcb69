//! The options root: every group plus the TOML round trip.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::group::Group;
use crate::groups::{
    ApexOptions, EventOptions, FruitOptions, GeneralOptions, InputOptions, InternodeOptions,
    LeafOptions, MarkovOptions, OutputOptions, TreeOptions, WoodOptions,
};

/// The full simulation parameter set.
///
/// Every construction path hands back an independent value; defaults are
/// rebuilt per instance, never shared.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Options {
    pub general: GeneralOptions,
    pub input: InputOptions,
    pub output: OutputOptions,
    pub events: EventOptions,
    pub tree: TreeOptions,
    pub wood: WoodOptions,
    pub internode: InternodeOptions,
    pub apex: ApexOptions,
    pub markov: MarkovOptions,
    pub fruit: FruitOptions,
    pub leaf: LeafOptions,
}

impl Options {
    /// Creates the stock parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a raw nested mapping.
    ///
    /// Sections may be omitted and keep their defaults; present sections
    /// are coerced group by group. A key naming no section fails with
    /// [`Error::UnknownField`].
    pub fn from_mapping(mut mapping: Table) -> Result<Self> {
        let options = Self {
            general: section(&mut mapping)?,
            input: section(&mut mapping)?,
            output: section(&mut mapping)?,
            events: section(&mut mapping)?,
            tree: section(&mut mapping)?,
            wood: section(&mut mapping)?,
            internode: section(&mut mapping)?,
            apex: section(&mut mapping)?,
            markov: section(&mut mapping)?,
            fruit: section(&mut mapping)?,
            leaf: section(&mut mapping)?,
        };
        if let Some(unknown) = mapping.keys().next() {
            return Err(Error::UnknownField {
                group: "options",
                field: unknown.clone(),
            });
        }
        Ok(options)
    }

    /// Parse options from TOML text.
    pub fn loads(text: &str) -> Result<Self> {
        let mapping: Table = text.parse()?;
        Self::from_mapping(mapping)
    }

    /// Render the full parameter set as TOML text.
    ///
    /// Dates come out as native TOML dates and the terminal fate table in
    /// its `year -> zone -> codes` shape, so the text parses back through
    /// [`Options::loads`] unchanged.
    pub fn dumps(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Export the whole parameter set as a nested mapping.
    pub fn export(&self) -> Result<Table> {
        Ok(Table::try_from(self)?)
    }

    /// Read one section as a mapping by name.
    pub fn field(&self, name: &str) -> Result<Value> {
        self.export()?
            .remove(name)
            .ok_or_else(|| Error::UnknownField {
                group: "options",
                field: name.to_string(),
            })
    }

    /// Read options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading options");
        let text = fs::read_to_string(path)?;
        Self::loads(&text)
    }

    /// Write options to a TOML file, replacing any existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "saving options");
        fs::write(path, self.dumps()?)?;
        Ok(())
    }
}

fn section<G: Group>(mapping: &mut Table) -> Result<G> {
    match mapping.remove(G::NAME) {
        None => Ok(G::default()),
        Some(Value::Table(section)) => G::from_mapping(section),
        Some(other) => Err(Error::Coercion {
            group: G::NAME,
            message: format!("expected a table, found {}", other.type_str()),
        }),
    }
}
