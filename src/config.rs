//! Scenario configuration
//!
//! A scenario bundles a color map, the robot's motions and measurements and
//! the two noise probabilities. Scenarios are read from TOML:
//!
//! ```toml
//! colors = [["R", "G", "G"], ["G", "R", "G"]]
//! measurements = ["G", "R"]
//! motions = ["stay", [0, 1]]
//! prob_sensor_correct = 0.8
//! prob_move = 0.9
//! ```
//!
//! Every key is required and unknown keys are rejected. The reference
//! scenario is only used through [`ScenarioConfig::default`].

use crate::common::types::{Color, Displacement, Motion};
use crate::error::Result;
use crate::perception::belief::BeliefGrid;
use crate::perception::localization::localize;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A motion given either by name or as a `[dy, dx]` pair
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MotionSpec {
    Named(Motion),
    Delta([i32; 2]),
}

impl From<MotionSpec> for Displacement {
    fn from(motion: MotionSpec) -> Self {
        match motion {
            MotionSpec::Named(motion) => motion.delta(),
            MotionSpec::Delta([dy, dx]) => (dy, dx),
        }
    }
}

impl From<Motion> for MotionSpec {
    fn from(motion: Motion) -> Self {
        MotionSpec::Named(motion)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Map rows, top to bottom
    pub colors: Vec<Vec<Color>>,
    /// One measurement per step, taken after the motion
    pub measurements: Vec<Color>,
    /// One intended motion per step
    pub motions: Vec<MotionSpec>,
    pub prob_sensor_correct: f64,
    pub prob_move: f64,
}

/// The reference scenario
impl Default for ScenarioConfig {
    fn default() -> Self {
        use Color::{Green as G, Red as R};
        use Motion::{Down, Right, Stay};

        Self {
            colors: vec![
                vec![R, G, G, R, R],
                vec![R, R, G, R, R],
                vec![R, R, G, G, R],
                vec![R, R, R, R, R],
            ],
            measurements: vec![G, G, G, G, G],
            motions: [Stay, Right, Down, Down, Right]
                .into_iter()
                .map(MotionSpec::from)
                .collect(),
            prob_sensor_correct: 0.7,
            prob_move: 0.8,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a scenario from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded scenario from {}", path.as_ref().display());
        Ok(config)
    }

    /// Number of filter steps in the scenario
    pub fn steps(&self) -> usize {
        self.motions.len()
    }

    /// Run the localizer over this scenario
    pub fn run(&self) -> Result<BeliefGrid> {
        localize(
            &self.colors,
            &self.measurements,
            &self.motions,
            self.prob_sensor_correct,
            self.prob_move,
        )
    }
}
