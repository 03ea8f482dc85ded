//! Sensor models for grid localization

use crate::error::{check_probability, Result};

/// A sensor measurement model
pub trait SensorModel<L> {
    /// Likelihood of observing `measurement` while standing on a cell labelled `cell_label`
    fn likelihood(&self, cell_label: &L, measurement: &L) -> f64;
}

/// Binary color sensor: reports the true cell color with a fixed probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSensor {
    prob_correct: f64,
}

impl ColorSensor {
    /// Create a color sensor, rejecting probabilities outside [0, 1]
    pub fn new(prob_correct: f64) -> Result<Self> {
        check_probability("prob_sensor_correct", prob_correct)?;
        Ok(ColorSensor { prob_correct })
    }

    pub fn prob_correct(&self) -> f64 {
        self.prob_correct
    }
}

impl<L: PartialEq> SensorModel<L> for ColorSensor {
    fn likelihood(&self, cell_label: &L, measurement: &L) -> f64 {
        if cell_label == measurement {
            self.prob_correct
        } else {
            1.0 - self.prob_correct
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Color;
    use crate::error::LocalizationError;
    use approx::assert_relative_eq;

    #[test]
    fn test_likelihood() {
        let sensor = ColorSensor::new(0.7).unwrap();
        assert_relative_eq!(sensor.likelihood(&Color::Red, &Color::Red), 0.7);
        assert_relative_eq!(sensor.likelihood(&Color::Red, &Color::Green), 0.3);
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(matches!(
            ColorSensor::new(1.2),
            Err(LocalizationError::ProbabilityOutOfRange {
                name: "prob_sensor_correct",
                ..
            })
        ));
        assert!(ColorSensor::new(f64::NAN).is_err());
    }
}
