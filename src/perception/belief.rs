//! Belief grid over map cells
//!
//! A [`BeliefGrid`] is a probability mass function over the cells of a
//! color map. The filter never mutates a grid in place: every update
//! builds a fresh grid from the previous one.

use crate::common::types::Cell;
use crate::error::{LocalizationError, Result};
use nalgebra::DMatrix;
use std::fmt;
use std::ops::Index;

/// Decimal places used when displaying a belief grid
pub const DISPLAY_PRECISION: usize = 5;

/// Probability of the robot occupying each grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct BeliefGrid {
    data: DMatrix<f64>,
}

impl BeliefGrid {
    /// Uniform belief: every cell holds 1 / (rows * cols)
    pub fn uniform(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LocalizationError::EmptyMap);
        }
        let p = 1.0 / (rows as f64 * cols as f64);
        Ok(BeliefGrid {
            data: DMatrix::from_element(rows, cols, p),
        })
    }

    /// All mass on a single cell
    pub fn point_mass(rows: usize, cols: usize, cell: Cell) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LocalizationError::EmptyMap);
        }
        if cell.0 >= rows || cell.1 >= cols {
            return Err(LocalizationError::CellOutOfBounds {
                row: cell.0,
                col: cell.1,
                rows,
                cols,
            });
        }
        let mut data = DMatrix::zeros(rows, cols);
        data[cell] = 1.0;
        Ok(BeliefGrid { data })
    }

    /// Build a grid from raw rows. Values are taken as given, not normalized.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LocalizationError::EmptyMap);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(LocalizationError::RaggedMap {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(BeliefGrid {
            data: DMatrix::from_fn(height, width, |r, c| rows[r][c]),
        })
    }

    pub(crate) fn from_matrix(data: DMatrix<f64>) -> Self {
        BeliefGrid { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Probability at a cell, or `None` out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Total probability mass
    pub fn total(&self) -> f64 {
        self.data.sum()
    }

    /// Check that every entry is non-negative and the mass sums to 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        self.data.iter().all(|&p| p >= 0.0) && (self.total() - 1.0).abs() <= tolerance
    }

    /// Cell with the highest probability. Ties go to the first cell in row-major order.
    pub fn most_likely_cell(&self) -> Cell {
        let mut best = (0, 0);
        let mut best_p = f64::NEG_INFINITY;
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let p = self.data[(r, c)];
                if p > best_p {
                    best_p = p;
                    best = (r, c);
                }
            }
        }
        best
    }

    /// Underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl Index<Cell> for BeliefGrid {
    type Output = f64;

    fn index(&self, cell: Cell) -> &f64 {
        &self.data[cell]
    }
}

/// Rows of fixed-precision values, e.g. `[[0.25000,0.25000],\n [0.25000,0.25000]]`
impl fmt::Display for BeliefGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .data
            .row_iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|p| format!("{:.*}", DISPLAY_PRECISION, p))
                    .collect();
                format!("[{}]", cells.join(","))
            })
            .collect();
        write!(f, "[{}]", rows.join(",\n "))
    }
}
