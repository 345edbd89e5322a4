//! Square sampling mesh symmetric about the origin.

use crate::error::FieldError;
use glam::DVec2;

/// Coordinate axes of an `n × n` Cartesian mesh spanning `[-extent, extent]`
/// on both axes. Mesh point `(i, j)` is `(x[i], y[j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Grid {
    /// Builds an evenly spaced mesh with `n` samples per axis, endpoints
    /// included. A single sample sits at `-extent`.
    ///
    /// Returns `FieldError::InvalidResolution` if `n` is zero and
    /// `FieldError::DegenerateExtent` if `extent` is not a positive finite
    /// number.
    pub fn symmetric(extent: f64, n: usize) -> Result<Self, FieldError> {
        if n == 0 {
            return Err(FieldError::InvalidResolution);
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(FieldError::DegenerateExtent);
        }
        let axis = linspace(-extent, extent, n);
        Ok(Self {
            x: axis.clone(),
            y: axis,
        })
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.x.len()
    }

    /// X coordinates, one per column index `i`.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinates, one per row index `j`.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The mesh point at `(i, j)`, or `None` when out of range.
    pub fn point(&self, i: usize, j: usize) -> Option<DVec2> {
        Some(DVec2::new(*self.x.get(i)?, *self.y.get(j)?))
    }

    /// All mesh points in field storage order: `j` outer, `i` inner.
    pub fn points(&self) -> Vec<DVec2> {
        self.y
            .iter()
            .flat_map(|&y| self.x.iter().map(move |&x| DVec2::new(x, y)))
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n)
        .map(|k| {
            if k == n - 1 {
                stop
            } else {
                start + step * k as f64
            }
        })
        .collect()
}
