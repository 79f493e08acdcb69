//! Internode growth kinetics.

use stocatree_options::InternodeOptions;

use crate::zone::Zone;

/// Growth-rate engine for a single internode.
///
/// The zone an internode appears in decides the final length it grows
/// towards; elongation then proceeds linearly over `elongation_period`
/// days. The eight terminal lengths are derived from `max_length` once at
/// construction and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Internode {
    min_length: f64,
    plastochron: f64,
    elongation_period: f64,
    max_length: f64,
    final_none: f64,
    final_dormant_start: f64,
    final_small: f64,
    final_diffuse: f64,
    final_medium: f64,
    final_floral: f64,
    final_dormant_end: f64,
    final_else: f64,
}

impl Internode {
    /// Builds an engine from the four elongation parameters.
    ///
    /// All four are expected strictly positive; this is not checked.
    pub fn new(
        min_length: f64,
        elongation_period: f64,
        plastochron: f64,
        max_length: f64,
    ) -> Self {
        Self {
            min_length,
            plastochron,
            elongation_period,
            max_length,
            final_none: max_length / 1.5,
            final_dormant_start: 0.25 * max_length / 1.5,
            final_small: 0.5 * max_length / 1.5,
            final_diffuse: max_length / 1.5,
            final_medium: 0.75 * max_length / 1.5,
            final_floral: 0.5 * max_length / 1.5,
            final_dormant_end: 0.25 * max_length / 1.5,
            final_else: 0.25 * max_length / 1.5,
        }
    }

    /// Builds an engine from the internode options group.
    pub fn from_options(options: &InternodeOptions) -> Self {
        Self::new(
            options.min_length,
            options.elongation_period,
            options.plastochron,
            options.max_length,
        )
    }

    /// Elongation velocity [m/day] for an internode observed in `zone`.
    ///
    /// `None` is the out-of-sequence sentinel. A label naming no known
    /// zone falls back to the slowest rate rather than failing.
    pub fn growth_rate(&self, zone: Option<&str>) -> f64 {
        self.terminal_length(zone) / self.elongation_period
    }

    /// Final length [m] an internode observed in `zone` grows towards.
    pub fn terminal_length(&self, zone: Option<&str>) -> f64 {
        let Some(label) = zone else {
            return self.final_none;
        };
        match Zone::parse(label) {
            Some(Zone::DormantStart) => self.final_dormant_start,
            Some(Zone::Small) => self.final_small,
            Some(Zone::Diffuse) => self.final_diffuse,
            Some(Zone::Medium) => self.final_medium,
            Some(Zone::Floral) => self.final_floral,
            Some(Zone::DormantEnd) => self.final_dormant_end,
            None => self.final_else,
        }
    }

    /// Length at creation [m].
    pub fn min_length(&self) -> f64 {
        self.min_length
    }

    /// Days over which the internode elongates.
    pub fn elongation_period(&self) -> f64 {
        self.elongation_period
    }

    /// Days between successive internode initiations.
    pub fn plastochron(&self) -> f64 {
        self.plastochron
    }

    /// Upper bound on the final length [m].
    pub fn max_length(&self) -> f64 {
        self.max_length
    }
}

impl Default for Internode {
    fn default() -> Self {
        Self::from_options(&InternodeOptions::default())
    }
}
