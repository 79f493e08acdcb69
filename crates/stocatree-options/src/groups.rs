//! Typed option groups.
//!
//! One record per section of the options file, with field declaration
//! order matching export order. The `Default` impls spell out the stock
//! parameter set for the simulated Fuji apple tree.

use std::path::PathBuf;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use toml::Table;

use crate::error::Result;
use crate::fate::TerminalFate;
use crate::group::{coerce, Group};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invariant: hardcoded dates are valid")
}

/// Run-level switches: the simulated span, seeding and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralOptions {
    /// First simulated day.
    #[serde(with = "crate::dates")]
    pub date_start: NaiveDate,
    /// Last simulated day.
    #[serde(with = "crate::dates")]
    pub date_end: NaiveDate,
    /// Seed for the run's random draws.
    pub seed: u64,
    /// Draw second-year shoots from the Markov model.
    pub second_year_draws: bool,
    /// Allow branches to rupture under load.
    pub ruptures: bool,
    /// Stake the trunk so its metamers stay vertical.
    pub stake: bool,
    /// Which of the observed trunk sequences to grow, counting from 0.
    pub select_trunk: u32,
    /// Run the rotation mechanics between growth steps.
    pub mechanics: bool,
    /// Render mode, one of bark, observations, zones, reaction_wood or
    /// year. Membership is not checked here.
    pub render_mode: String,
    /// Number of surface elements per rendered shape.
    pub stride_number: u32,
    pub pruning: bool,
    /// Iterations of the mechanics solver per growth step.
    pub convergence_steps: u32,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            date_start: date(1994, 1, 1),
            date_end: date(1998, 6, 30),
            seed: 1163078255,
            second_year_draws: true,
            ruptures: false,
            stake: true,
            select_trunk: 0,
            mechanics: true,
            render_mode: "bark".to_string(),
            stride_number: 5,
            pruning: false,
            convergence_steps: 2,
        }
    }
}

impl Group for GeneralOptions {
    const NAME: &'static str = "general";
}

/// Locations of the growth grammar scripts driving the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOptions {
    /// Directory searched for grammar scripts. Defaults to the `lpy`
    /// directory shipped with this crate.
    pub lpy_path: PathBuf,
    /// Named grammar scripts, resolved against `lpy_path` when relative.
    pub lpy_files: IndexMap<String, PathBuf>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            lpy_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/lpy")),
            lpy_files: IndexMap::new(),
        }
    }
}

impl Group for InputOptions {
    const NAME: &'static str = "input";
}

/// Which data streams the simulation writes out while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    /// Observation sequences drawn from the Markov models.
    pub sequences: bool,
    /// The raw L-string after each step.
    pub l_string: bool,
    pub light_interception: bool,
    /// Shoot counts per length category.
    pub counts: bool,
    /// Properties of the metamer adjacent to the root.
    pub trunk: bool,
    /// Leaf position, age and area over time.
    pub leaves: bool,
    /// An MTG representation of the tree.
    pub mtg: bool,
    pub shoots: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            sequences: false,
            l_string: false,
            light_interception: false,
            counts: false,
            trunk: false,
            leaves: true,
            mtg: false,
            shoots: false,
        }
    }
}

impl Group for OutputOptions {
    const NAME: &'static str = "output";
}

/// A recurring day of the simulated year.
///
/// Day and month are not checked against the calendar; resolving them
/// falls to the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventDate {
    pub day: u32,
    pub month: u32,
    /// How many days the event spans.
    pub duration: u32,
}

impl EventDate {
    pub const fn new(day: u32, month: u32, duration: u32) -> Self {
        Self { day, month, duration }
    }
}

/// The yearly phenological calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventOptions {
    pub bud_break: EventDate,
    pub new_cambial_layer: EventDate,
    pub pre_harvest: EventDate,
    pub harvest: EventDate,
    pub autumn: EventDate,
    pub leaf_fall: EventDate,
    pub leaf_out: EventDate,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            bud_break: EventDate::new(15, 5, 1),
            new_cambial_layer: EventDate::new(15, 5, 1),
            pre_harvest: EventDate::new(29, 10, 1),
            harvest: EventDate::new(30, 10, 1),
            autumn: EventDate::new(1, 11, 45),
            leaf_fall: EventDate::new(15, 11, 45),
            leaf_out: EventDate::new(25, 12, 1),
        }
    }
}

impl Group for EventOptions {
    const NAME: &'static str = "events";
}

/// Whole-tree geometry and survival parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeOptions {
    /// Angle between successive organs around the shoot axis [deg].
    pub phyllotactic_angle: f64,
    /// Insertion angle of lateral shoots [deg].
    pub branching_angle: f64,
    /// Insertion angle of floral organs [deg].
    pub floral_angle: f64,
    /// Strength of the upward reorientation of growing shoots.
    pub tropism: f64,
    pub preformed_leaves: f64,
    pub spur_death_probability: f64,
    pub inflorescence_death_probability: f64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            phyllotactic_angle: -144.0,
            branching_angle: 45.0,
            floral_angle: -10.0,
            tropism: 0.1,
            preformed_leaves: 8.0,
            spur_death_probability: 0.3,
            inflorescence_death_probability: 0.2,
        }
    }
}

impl Group for TreeOptions {
    const NAME: &'static str = "tree";
}

/// Material constants of the woody structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WoodOptions {
    /// Wood density [kg/m3].
    pub wood_density: f64,
    pub reaction_wood_rate: f64,
    pub reaction_wood_inertia_coefficient: f64,
    /// Young's modulus [GPa].
    pub youngs_modulus: f64,
    /// Modulus of rupture [Pa].
    pub modulus_of_rupture: f64,
}

impl Default for WoodOptions {
    fn default() -> Self {
        Self {
            wood_density: 1000.0,
            reaction_wood_rate: 0.5,
            reaction_wood_inertia_coefficient: 0.1,
            youngs_modulus: 1.1,
            modulus_of_rupture: 50e6,
        }
    }
}

impl Group for WoodOptions {
    const NAME: &'static str = "wood";
}

/// Internode elongation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InternodeOptions {
    /// Length at creation [m].
    pub min_length: f64,
    /// Days over which an internode elongates [D].
    pub elongation_period: f64,
    /// Days between successive internode initiations.
    pub plastochron: f64,
    /// Longest final length an internode can reach [m].
    pub max_length: f64,
}

impl Default for InternodeOptions {
    fn default() -> Self {
        Self {
            min_length: 0.0001,
            elongation_period: 10.0,
            plastochron: 3.0,
            max_length: 0.03,
        }
    }
}

impl Group for InternodeOptions {
    const NAME: &'static str = "internode";
}

/// Apex sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApexOptions {
    /// Radial growth rate of a terminal apex [m/D].
    pub terminal_expansion_rate: f64,
    /// Smallest apex radius [m].
    pub minimum_size: f64,
    /// Largest apex radius [m].
    pub maximum_size: f64,
}

impl Default for ApexOptions {
    fn default() -> Self {
        Self {
            terminal_expansion_rate: 0.00002,
            minimum_size: 0.00075,
            maximum_size: 0.003,
        }
    }
}

impl Group for ApexOptions {
    const NAME: &'static str = "apex";
}

/// Markov sequence-generation bounds and the terminal fate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkovOptions {
    /// Longest accepted draw; must stay below 100.
    pub maximum_length: u32,
    /// Shortest accepted draw.
    pub minimum_length: u32,
    /// Fate codes per observation year and zone, already normalized.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub terminal_fate: Option<TerminalFate>,
}

impl Default for MarkovOptions {
    fn default() -> Self {
        Self {
            maximum_length: 70,
            minimum_length: 4,
            terminal_fate: Some(TerminalFate::new()),
        }
    }
}

impl Group for MarkovOptions {
    const NAME: &'static str = "markov";

    // Routes the raw fate value through the normalizer before the scalar
    // fields are coerced, so shape errors keep their own variant.
    fn from_mapping(mut mapping: Table) -> Result<Self> {
        let terminal_fate = match mapping.remove("terminal_fate") {
            None => Some(TerminalFate::new()),
            Some(value) => Some(TerminalFate::from_value(value)?),
        };
        let mut markov: Self = coerce(mapping)?;
        markov.terminal_fate = terminal_fate;
        Ok(markov)
    }
}

/// Fruit growth parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FruitOptions {
    /// Days a flower stays open [D].
    pub flower_duration: f64,
    pub max_relative_growth_rate: f64,
    /// Days between flowering and the onset of fruit growth [D].
    pub lost_time: f64,
    /// Days a fruit stays on the tree [D].
    pub max_age: f64,
    /// Chance that a flower sets a fruit.
    pub probability: f64,
    pub max_absolute_growth_rate: f64,
}

impl Default for FruitOptions {
    fn default() -> Self {
        Self {
            flower_duration: 10.0,
            max_relative_growth_rate: 0.167,
            lost_time: 28.0,
            max_age: 147.0,
            probability: 0.3,
            max_absolute_growth_rate: 0.0018,
        }
    }
}

impl Group for FruitOptions {
    const NAME: &'static str = "fruit";
}

/// Leaf growth and senescence parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeafOptions {
    pub fall_probability: f64,
    /// Days for a leaf to reach its final area [D].
    pub maturation: u32,
    /// Dry mass per unit leaf area [kg/m2].
    pub mass_per_area: f64,
    /// Largest final leaf area [m2].
    pub max_area: f64,
    /// Smallest final leaf area [m2].
    pub min_final_area: f64,
    /// Petiole radius [m].
    pub petiole_radius: f64,
    /// Leaves preformed in the bud before budbreak.
    pub preformed_leaves: u32,
}

impl Default for LeafOptions {
    fn default() -> Self {
        Self {
            fall_probability: 0.1,
            maturation: 12,
            mass_per_area: 0.220,
            max_area: 0.003,
            min_final_area: 0.0020,
            petiole_radius: 0.0006,
            preformed_leaves: 8,
        }
    }
}

impl Group for LeafOptions {
    const NAME: &'static str = "leaf";
}
