//! Histogram filter updates
//!
//! The two halves of the discrete Bayes filter:
//! - [`move_belief`]: prediction under a one-step motion that either fully
//!   succeeds or fully fails, on a toroidal grid
//! - [`sense_belief`]: correction by the color sensor likelihood followed by
//!   renormalization
//!
//! Both return a fresh grid and leave their input untouched.

use crate::common::types::Displacement;
use crate::error::{check_probability, LocalizationError, Result};
use crate::map::{wrap_coordinate, ColorMap};
use crate::perception::belief::BeliefGrid;
use crate::perception::sensors::{ColorSensor, SensorModel};
use nalgebra::DMatrix;

/// A generic motion model interface
pub trait MotionModel {
    /// Predict the belief after an intended displacement
    fn predict(&self, belief: &BeliefGrid, displacement: Displacement) -> BeliefGrid;
}

/// Single-step motion that succeeds with probability `prob_move`, otherwise the robot stays put
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMotion {
    prob_move: f64,
}

impl StepMotion {
    /// Create a step motion model, rejecting probabilities outside [0, 1]
    pub fn new(prob_move: f64) -> Result<Self> {
        check_probability("prob_move", prob_move)?;
        Ok(StepMotion { prob_move })
    }

    pub fn prob_move(&self) -> f64 {
        self.prob_move
    }
}

impl MotionModel for StepMotion {
    fn predict(&self, belief: &BeliefGrid, displacement: Displacement) -> BeliefGrid {
        move_belief(belief, displacement, self.prob_move)
    }
}

/// Motion update.
///
/// Each cell receives `prob_move` of the mass from the cell the robot would
/// have moved in from, plus `1 - prob_move` of its own mass. Rows and columns
/// wrap, so any integer displacement is valid.
pub fn move_belief(
    belief: &BeliefGrid,
    displacement: impl Into<Displacement>,
    prob_move: f64,
) -> BeliefGrid {
    let (dy, dx) = displacement.into();
    let (rows, cols) = belief.shape();
    let prior = belief.as_matrix();

    let predicted = DMatrix::from_fn(rows, cols, |r, c| {
        let src_r = wrap_coordinate(r as i64 - dy as i64, rows);
        let src_c = wrap_coordinate(c as i64 - dx as i64, cols);
        prob_move * prior[(src_r, src_c)] + (1.0 - prob_move) * prior[(r, c)]
    });

    BeliefGrid::from_matrix(predicted)
}

/// Sensing update with a binary color sensor of accuracy `prob_sensor_correct`.
pub fn sense_belief<L: Clone + PartialEq>(
    belief: &BeliefGrid,
    map: &ColorMap<L>,
    measurement: &L,
    prob_sensor_correct: f64,
) -> Result<BeliefGrid> {
    let sensor = ColorSensor::new(prob_sensor_correct)?;
    correct(belief, map, measurement, &sensor)
}

/// Sensing update against any sensor model.
///
/// Fails with [`LocalizationError::DegenerateBelief`] when the weighted mass
/// is zero or not finite, so no NaN/Inf grid is ever produced.
pub fn correct<L, S>(
    belief: &BeliefGrid,
    map: &ColorMap<L>,
    measurement: &L,
    sensor: &S,
) -> Result<BeliefGrid>
where
    L: Clone + PartialEq,
    S: SensorModel<L> + ?Sized,
{
    if belief.shape() != map.shape() {
        return Err(LocalizationError::GridShapeMismatch {
            belief_rows: belief.rows(),
            belief_cols: belief.cols(),
            map_rows: map.rows(),
            map_cols: map.cols(),
        });
    }

    let prior = belief.as_matrix();
    let (rows, cols) = belief.shape();
    let weighted = DMatrix::from_fn(rows, cols, |r, c| {
        // Shapes match, so every cell is in bounds
        let likelihood = map
            .get(r, c)
            .map_or(0.0, |label| sensor.likelihood(label, measurement));
        prior[(r, c)] * likelihood
    });

    let normalizer = weighted.sum();
    log::trace!("sensing normalizer = {}", normalizer);
    if !(normalizer > 0.0 && normalizer.is_finite()) {
        return Err(LocalizationError::DegenerateBelief { normalizer });
    }

    Ok(BeliefGrid::from_matrix(weighted / normalizer))
}
