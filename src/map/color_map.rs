//! Color map for sensing
//!
//! This module provides the static label grid the robot's color sensor is
//! compared against. The map is rectangular, non-empty and immutable once
//! built; cells are stored row-major.

use crate::error::{LocalizationError, Result};

/// A rectangular grid of sensor-observable labels
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap<L> {
    width: usize,
    height: usize,
    data: Vec<L>,
}

impl<L: Clone + PartialEq> ColorMap<L> {
    /// Build a map from rows of labels, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<L>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LocalizationError::EmptyMap);
        }

        let mut data = Vec::with_capacity(width * height);
        for (row, labels) in rows.into_iter().enumerate() {
            if labels.len() != width {
                return Err(LocalizationError::RaggedMap {
                    row,
                    expected: width,
                    found: labels.len(),
                });
            }
            data.extend(labels);
        }

        Ok(ColorMap {
            width,
            height,
            data,
        })
    }

    /// Build a map from rows given as slices, e.g. `&[&["R", "G"], ...]`
    pub fn from_slices<R: AsRef<[L]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|row| row.as_ref().to_vec()).collect())
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.width
    }

    /// Map dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Get the label at a cell, or `None` out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&L> {
        if row < self.height && col < self.width {
            Some(&self.data[row * self.width + col])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let map = ColorMap::from_slices(&[["R", "G", "G"], ["R", "R", "G"]]).unwrap();
        assert_eq!(map.shape(), (2, 3));
        assert_eq!(map.get(0, 1), Some(&"G"));
        assert_eq!(map.get(1, 0), Some(&"R"));
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(0, 3), None);
    }

    #[test]
    fn test_rejects_empty() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(ColorMap::from_rows(rows), Err(LocalizationError::EmptyMap));
        assert_eq!(
            ColorMap::<&str>::from_rows(vec![vec![]]),
            Err(LocalizationError::EmptyMap)
        );
    }

    #[test]
    fn test_rejects_ragged() {
        let rows = vec![vec!["R", "G"], vec!["R"], vec!["G", "G"]];
        assert_eq!(
            ColorMap::from_rows(rows),
            Err(LocalizationError::RaggedMap {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }
}
