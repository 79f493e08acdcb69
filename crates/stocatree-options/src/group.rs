//! Parameter-group contract.
//!
//! Every options section is a plain typed record implementing [`Group`].
//! Construction is either `Default::default()` (declared defaults) or
//! [`Group::from_mapping`] (coercion from a raw nested mapping). Read
//! access by name goes through [`Group::export`] and [`Group::field`];
//! the records themselves are not mappings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::{Table, Value};

use crate::error::{Error, Result};

/// A named section of the simulation options.
pub trait Group: Serialize + DeserializeOwned + Default {
    /// Section name in the options text format.
    const NAME: &'static str;

    /// Coerce a raw nested mapping into this group.
    ///
    /// Fields absent from `mapping` keep their declared defaults. Unknown
    /// keys and values of the wrong shape fail with [`Error::Coercion`].
    fn from_mapping(mapping: Table) -> Result<Self> {
        coerce(mapping)
    }

    /// Export this group as a plain nested mapping.
    ///
    /// Key order matches field declaration order.
    fn export(&self) -> Result<Table> {
        Ok(Table::try_from(self)?)
    }

    /// Read a single field by name.
    fn field(&self, name: &str) -> Result<Value> {
        self.export()?
            .remove(name)
            .ok_or_else(|| Error::UnknownField {
                group: Self::NAME,
                field: name.to_string(),
            })
    }
}

/// Deserialize a raw table into `G`, labelling failures with the group name.
pub(crate) fn coerce<G: Group>(mapping: Table) -> Result<G> {
    Value::Table(mapping)
        .try_into()
        .map_err(|err: toml::de::Error| Error::Coercion {
            group: G::NAME,
            message: err.to_string(),
        })
}
