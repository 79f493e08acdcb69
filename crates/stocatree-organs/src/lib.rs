//! Organ-level growth kinetics for the stocatree apple tree model.
//!
//! Covers the internode: the developmental-zone vocabulary coming out of
//! the Markov observation sequences and the per-zone elongation rates.
//!
//! ```
//! use stocatree_options::Options;
//! use stocatree_organs::Internode;
//!
//! let options = Options::new();
//! let internode = Internode::from_options(&options.internode);
//!
//! assert!((internode.growth_rate(Some("small")) - 0.001).abs() < 1e-12);
//! ```

mod internode;
mod zone;

pub use internode::Internode;
pub use zone::Zone;
