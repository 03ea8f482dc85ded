//! Common utilities and types for grid localization

/// Common types and utilities used across the codebase
pub mod types {
    use serde::Deserialize;
    use std::fmt;

    /// A grid cell as (row, col)
    pub type Cell = (usize, usize);

    /// A relative displacement as (row-delta, col-delta)
    pub type Displacement = (i32, i32);

    pub const STAY: Displacement = (0, 0);
    pub const RIGHT: Displacement = (0, 1);
    pub const LEFT: Displacement = (0, -1);
    pub const DOWN: Displacement = (1, 0);
    pub const UP: Displacement = (-1, 0);

    /// Colors the robot's sensor can observe on the reference map
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
    pub enum Color {
        #[serde(rename = "R", alias = "red")]
        Red,
        #[serde(rename = "G", alias = "green")]
        Green,
    }

    impl fmt::Display for Color {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Color::Red => write!(f, "R"),
                Color::Green => write!(f, "G"),
            }
        }
    }

    /// Intended one-step motion of the robot
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Motion {
        Stay,
        Right,
        Left,
        Down,
        Up,
    }

    impl Motion {
        /// Row/column displacement of this motion
        pub fn delta(self) -> Displacement {
            match self {
                Motion::Stay => STAY,
                Motion::Right => RIGHT,
                Motion::Left => LEFT,
                Motion::Down => DOWN,
                Motion::Up => UP,
            }
        }
    }

    impl From<Motion> for Displacement {
        fn from(motion: Motion) -> Self {
            motion.delta()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn test_motion_deltas() {
        assert_eq!(Motion::Stay.delta(), (0, 0));
        assert_eq!(Motion::Right.delta(), (0, 1));
        assert_eq!(Motion::Left.delta(), (0, -1));
        assert_eq!(Motion::Down.delta(), (1, 0));
        assert_eq!(Motion::Up.delta(), (-1, 0));

        let d: Displacement = Motion::Up.into();
        assert_eq!(d, UP);
    }

    #[test]
    fn test_color_labels() {
        assert_eq!(Color::Green.to_string(), "G");
    }
}
