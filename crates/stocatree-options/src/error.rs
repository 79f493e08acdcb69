//! Options errors.

use thiserror::Error;

/// Options result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing, coercing, or serializing options.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing an options file failed.
    #[error("options file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not structurally valid TOML.
    #[error("failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value could not be represented at the dump boundary.
    #[error("failed to encode options TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Access to a field name not declared in a group's schema.
    #[error("unknown field '{field}' in group '{group}'")]
    UnknownField {
        /// Group whose schema was consulted.
        group: &'static str,
        /// The undeclared field name.
        field: String,
    },

    /// Terminal-fate raw input with the wrong shape.
    #[error("malformed terminal fate table: {0}")]
    MalformedFateTable(String),

    /// A raw mapping supplied for a group cannot be coerced to its field types.
    #[error("cannot coerce group '{group}': {message}")]
    Coercion {
        /// Group the raw mapping was supplied for.
        group: &'static str,
        /// Underlying deserialization failure.
        message: String,
    },
}
