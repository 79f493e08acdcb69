//! Typed simulation options for the stocatree apple tree model.
//!
//! Parameters are grouped into sections mirroring the options file
//! layout. Every group carries the stock Fuji defaults, coerces from raw
//! TOML mappings, and exports back to plain mappings, so a full parameter
//! set round-trips through text unchanged.
//!
//! ```
//! use stocatree_options::Options;
//!
//! let options = Options::loads(
//!     r#"
//! [general]
//! seed = 42
//!
//! [internode]
//! max_length = 0.06
//! "#,
//! )?;
//!
//! assert_eq!(options.general.seed, 42);
//! assert_eq!(options.internode.elongation_period, 10.0);
//! # Ok::<(), stocatree_options::Error>(())
//! ```

mod dates;
mod error;
mod fate;
mod group;
mod groups;
mod options;

pub use error::{Error, Result};
pub use fate::{normalize, FateLine, TerminalFate};
pub use group::Group;
pub use groups::{
    ApexOptions, EventDate, EventOptions, FruitOptions, GeneralOptions, InputOptions,
    InternodeOptions, LeafOptions, MarkovOptions, OutputOptions, TreeOptions, WoodOptions,
};
pub use options::Options;
