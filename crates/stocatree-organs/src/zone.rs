//! Developmental zone vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Developmental zone of a metamer within its growth unit.
///
/// Zones come out of the fitted Markov observation sequences. The
/// out-of-sequence case is `Option::None` at call sites, not a variant;
/// an unrecognized label is a different thing again and parses to `None`
/// here without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    DormantStart,
    Small,
    Diffuse,
    Medium,
    Floral,
    DormantEnd,
}

impl Zone {
    /// Every zone, in sequence order.
    pub const ALL: [Zone; 6] = [
        Zone::DormantStart,
        Zone::Small,
        Zone::Diffuse,
        Zone::Medium,
        Zone::Floral,
        Zone::DormantEnd,
    ];

    /// The label used in observation sequences and fate tables.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::DormantStart => "dormant_start",
            Zone::Small => "small",
            Zone::Diffuse => "diffuse",
            Zone::Medium => "medium",
            Zone::Floral => "floral",
            Zone::DormantEnd => "dormant_end",
        }
    }

    /// Look up a zone by its label.
    pub fn parse(label: &str) -> Option<Zone> {
        Zone::ALL.iter().copied().find(|zone| zone.label() == label)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
