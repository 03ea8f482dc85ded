//! Error types for grid localization

use thiserror::Error;

/// Localization error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocalizationError {
    #[error("Invalid color map: map has no cells")]
    EmptyMap,

    #[error("Invalid color map: row {row} has {found} cells, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sequence length mismatch: {motions} motions but {measurements} measurements")]
    SequenceLengthMismatch { motions: usize, measurements: usize },

    #[error("Probability out of range: {name} = {value} is not within [0, 1]")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("Degenerate belief: normalization sum is zero (got {normalizer})")]
    DegenerateBelief { normalizer: f64 },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Belief grid is {belief_rows}x{belief_cols} but color map is {map_rows}x{map_cols}")]
    GridShapeMismatch {
        belief_rows: usize,
        belief_cols: usize,
        map_rows: usize,
        map_cols: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for LocalizationError {
    fn from(e: toml::de::Error) -> Self {
        LocalizationError::Config(e.to_string())
    }
}

impl From<std::io::Error> for LocalizationError {
    fn from(e: std::io::Error) -> Self {
        LocalizationError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LocalizationError>;

/// Check that a probability lies in [0, 1]. NaN is rejected.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LocalizationError::ProbabilityOutOfRange { name, value })
    }
}
