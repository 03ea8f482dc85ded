//! Perception module: belief state, sensor models and the histogram filter
pub mod belief;
pub mod filters;
pub mod localization;
pub mod sensors;

pub use self::belief::BeliefGrid;
pub use self::filters::{move_belief, sense_belief};
pub use self::localization::{localize, HistogramLocalizer};
