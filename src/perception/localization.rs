//! Localization module
//!
//! Runs the histogram filter over paired motion and measurement sequences,
//! starting from a uniform belief. Each step moves first, then senses.

use crate::common::types::Displacement;
use crate::error::{LocalizationError, Result};
use crate::map::ColorMap;
use crate::perception::belief::BeliefGrid;
use crate::perception::filters::{correct, MotionModel, StepMotion};
use crate::perception::sensors::ColorSensor;
use std::fmt::Debug;

/// A histogram localizer for the robot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramLocalizer {
    sensor: ColorSensor,
    motion: StepMotion,
}

impl HistogramLocalizer {
    /// Create a new localizer from the sensor accuracy and motion success probability
    pub fn new(prob_sensor_correct: f64, prob_move: f64) -> Result<Self> {
        Ok(HistogramLocalizer {
            sensor: ColorSensor::new(prob_sensor_correct)?,
            motion: StepMotion::new(prob_move)?,
        })
    }

    pub fn prob_sensor_correct(&self) -> f64 {
        self.sensor.prob_correct()
    }

    pub fn prob_move(&self) -> f64 {
        self.motion.prob_move()
    }

    /// Apply one filter step: motion update, then sensing update
    pub fn step<L>(
        &self,
        belief: &BeliefGrid,
        map: &ColorMap<L>,
        displacement: impl Into<Displacement>,
        measurement: &L,
    ) -> Result<BeliefGrid>
    where
        L: Clone + PartialEq,
    {
        let predicted = self.motion.predict(belief, displacement.into());
        correct(&predicted, map, measurement, &self.sensor)
    }

    /// Localize from a uniform prior over paired motions and measurements
    pub fn localize<L, D>(
        &self,
        map: &ColorMap<L>,
        measurements: &[L],
        motions: &[D],
    ) -> Result<BeliefGrid>
    where
        L: Clone + PartialEq + Debug,
        D: Copy + Into<Displacement>,
    {
        if motions.len() != measurements.len() {
            return Err(LocalizationError::SequenceLengthMismatch {
                motions: motions.len(),
                measurements: measurements.len(),
            });
        }

        let mut belief = BeliefGrid::uniform(map.rows(), map.cols())?;

        for (i, (&motion, measurement)) in motions.iter().zip(measurements).enumerate() {
            let displacement: Displacement = motion.into();
            belief = match self.step(&belief, map, displacement, measurement) {
                Ok(next) => next,
                Err(e) => {
                    log::warn!(
                        "Step {} aborted (motion {:?}, measurement {:?}): {}",
                        i,
                        displacement,
                        measurement,
                        e
                    );
                    return Err(e);
                }
            };
            log::debug!(
                "Step {}: motion {:?}, measurement {:?}, most likely cell {:?}",
                i,
                displacement,
                measurement,
                belief.most_likely_cell()
            );
        }

        Ok(belief)
    }
}

/// Localize a robot on a toroidal color map.
///
/// `colors` is the map as rows of labels. Probabilities and the map shape are
/// validated before any step runs; the motion and measurement sequences must
/// have the same length.
pub fn localize<R, L, D>(
    colors: &[R],
    measurements: &[L],
    motions: &[D],
    prob_sensor_correct: f64,
    prob_move: f64,
) -> Result<BeliefGrid>
where
    R: AsRef<[L]>,
    L: Clone + PartialEq + Debug,
    D: Copy + Into<Displacement>,
{
    let localizer = HistogramLocalizer::new(prob_sensor_correct, prob_move)?;
    let map = ColorMap::from_slices(colors)?;
    localizer.localize(&map, measurements, motions)
}
