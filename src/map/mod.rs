//! Static maps the robot localizes against
pub mod color_map;

pub use self::color_map::ColorMap;

/// Wrap a signed grid coordinate onto a torus of `len` cells
pub fn wrap_coordinate(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coordinate() {
        assert_eq!(wrap_coordinate(0, 5), 0);
        assert_eq!(wrap_coordinate(5, 5), 0);
        assert_eq!(wrap_coordinate(-1, 5), 4);
        assert_eq!(wrap_coordinate(-6, 5), 4);
        assert_eq!(wrap_coordinate(12, 5), 2);
    }
}
