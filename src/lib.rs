//! Discrete histogram localization for a robot on a toroidal color grid.
//!
//! The robot moves in unit steps that may fail and reads the color of the
//! cell it stands on with a noisy sensor. [`localize`] runs the two-step
//! Bayes filter (move, then sense) from a uniform prior and returns the
//! final [`BeliefGrid`].
//!
//! ```
//! use grid_localization::{localize, Motion};
//!
//! let colors = [["R", "G", "G"], ["G", "R", "G"]];
//! let belief = localize(&colors, &["R", "G"], &[Motion::Stay, Motion::Right], 0.9, 0.8).unwrap();
//! assert!(belief.is_normalized(1e-9));
//! println!("{}", belief);
//! ```
pub mod common;
pub mod config;
pub mod error;
pub mod map;
pub mod perception;

pub use crate::common::types::{Color, Displacement, Motion, DOWN, LEFT, RIGHT, STAY, UP};
pub use crate::config::ScenarioConfig;
pub use crate::error::{LocalizationError, Result};
pub use crate::map::ColorMap;
pub use crate::perception::{localize, move_belief, sense_belief, BeliefGrid, HistogramLocalizer};
