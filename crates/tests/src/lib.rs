//! Integration test harness for stocatree.
//!
//! Builds full parameter sets from options text and hands out the organ
//! engines derived from them, so end-to-end tests read as
//! text -> options -> kinetics.

use stocatree_options::Options;
use stocatree_organs::Internode;

/// Test harness carrying one parsed parameter set.
pub struct TestHarness {
    options: Options,
}

impl TestHarness {
    /// Parse options text into a harness.
    ///
    /// # Panics
    ///
    /// Panics if the text does not parse as an options document.
    pub fn from_text(text: &str) -> Self {
        let options = match Options::loads(text) {
            Ok(options) => options,
            Err(err) => panic!("failed to load options: {err}"),
        };
        Self { options }
    }

    /// The parsed parameter set.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// An internode engine built from the current internode group.
    pub fn internode(&self) -> Internode {
        Internode::from_options(&self.options().internode)
    }
}
