//! Two-dimensional field of acceleration vectors.
//!
//! A `Field` stores `width * height` [`DVec2`] samples in row-major layout:
//! row `j` runs along the y axis, column `i` along the x axis. Access is
//! bounds-checked; there is no wrapping.

use crate::error::FieldError;
use glam::DVec2;

/// A 2D array of acceleration vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<DVec2>,
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![DVec2::ZERO; len],
        })
    }

    /// Creates a field from a pre-built row-major buffer, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<DVec2>) -> Result<Self, FieldError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Samples along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Samples along y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[DVec2] {
        &self.data
    }

    /// The vector at column `i`, row `j`.
    ///
    /// Returns `FieldError::OutOfBounds` outside the field.
    pub fn get(&self, i: usize, j: usize) -> Result<DVec2, FieldError> {
        if i >= self.width || j >= self.height {
            return Err(FieldError::OutOfBounds {
                x: i,
                y: j,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[j * self.width + i])
    }

    /// Element-wise Euclidean norm, same layout as [`Field::data`].
    pub fn magnitudes(&self) -> Vec<f64> {
        self.data.iter().map(|v| v.length()).collect()
    }

    /// Mean magnitude over the finite samples, or `None` if there are none.
    pub fn mean_magnitude(&self) -> Option<f64> {
        let (sum, count) = self
            .finite_magnitudes()
            .fold((0.0, 0usize), |(s, c), m| (s + m, c + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Smallest finite magnitude.
    pub fn min_magnitude(&self) -> Option<f64> {
        self.finite_magnitudes().reduce(f64::min)
    }

    /// Largest finite magnitude.
    pub fn max_magnitude(&self) -> Option<f64> {
        self.finite_magnitudes().reduce(f64::max)
    }

    /// Number of samples with a NaN or infinite component.
    pub fn non_finite_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }

    /// Iterates over all samples yielding `(i, j, vector)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, DVec2)> + '_ {
        self.data.iter().enumerate().map(|(k, &v)| {
            let i = k % self.width;
            let j = k / self.width;
            (i, j, v)
        })
    }

    fn finite_magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.data
            .iter()
            .map(|v| v.length())
            .filter(|m| m.is_finite())
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(FieldError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> Field {
        let data = (0..width * height)
            .map(|k| DVec2::new(k as f64, 0.0))
            .collect();
        Field::from_data(width, height, data).unwrap()
    }

    #[test]
    fn new_creates_zero_filled_field() {
        let field = Field::new(4, 3).unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.data().len(), 12);
        assert!(field.data().iter().all(|&v| v == DVec2::ZERO));
    }

    #[test]
    fn new_with_zero_dimension_returns_error() {
        assert!(matches!(
            Field::new(0, 5),
            Err(FieldError::InvalidDimensions)
        ));
        assert!(matches!(
            Field::new(5, 0),
            Err(FieldError::InvalidDimensions)
        ));
    }

    #[test]
    fn new_with_overflow_dimensions_returns_error() {
        assert!(Field::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = Field::from_data(2, 2, vec![DVec2::ZERO; 3]);
        assert!(matches!(result, Err(FieldError::DimensionMismatch { .. })));
    }

    #[test]
    fn get_uses_column_then_row() {
        let field = ramp(3, 2);
        assert_eq!(field.get(0, 0).unwrap().x, 0.0);
        assert_eq!(field.get(2, 0).unwrap().x, 2.0);
        assert_eq!(field.get(0, 1).unwrap().x, 3.0);
        assert_eq!(field.get(2, 1).unwrap().x, 5.0);
    }

    #[test]
    fn get_out_of_bounds_returns_error() {
        let field = ramp(3, 2);
        assert!(matches!(
            field.get(3, 0),
            Err(FieldError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        ));
        assert!(field.get(0, 2).is_err());
    }

    #[test]
    fn magnitudes_are_euclidean_norms() {
        let data = vec![DVec2::new(3.0, 4.0), DVec2::new(0.0, -2.0)];
        let field = Field::from_data(2, 1, data).unwrap();
        assert_eq!(field.magnitudes(), vec![5.0, 2.0]);
    }

    #[test]
    fn statistics_skip_non_finite_samples() {
        let field = Field::from_data(
            2,
            2,
            vec![
                DVec2::new(1.0, 0.0),
                DVec2::new(f64::NAN, f64::NAN),
                DVec2::new(0.0, 3.0),
                DVec2::new(f64::INFINITY, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(field.non_finite_count(), 2);
        assert_eq!(field.mean_magnitude(), Some(2.0));
        assert_eq!(field.min_magnitude(), Some(1.0));
        assert_eq!(field.max_magnitude(), Some(3.0));
    }

    #[test]
    fn statistics_of_all_nan_field_are_none() {
        let field = Field::from_data(1, 1, vec![DVec2::NAN]).unwrap();
        assert_eq!(field.mean_magnitude(), None);
        assert_eq!(field.max_magnitude(), None);
    }

    #[test]
    fn iter_yields_all_triples_in_row_major_order() {
        let field = ramp(3, 2);
        let triples: Vec<(usize, usize, DVec2)> = field.iter().collect();
        assert_eq!(triples.len(), 6);
        assert_eq!(triples[0], (0, 0, DVec2::new(0.0, 0.0)));
        assert_eq!(triples[2], (2, 0, DVec2::new(2.0, 0.0)));
        assert_eq!(triples[3], (0, 1, DVec2::new(3.0, 0.0)));
        assert_eq!(triples[5], (2, 1, DVec2::new(5.0, 0.0)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn get_matches_iter(w in 1_usize..=16, h in 1_usize..=16) {
                let field = ramp(w, h);
                for (i, j, v) in field.iter() {
                    prop_assert_eq!(field.get(i, j).unwrap(), v);
                }
            }

            #[test]
            fn mean_lies_between_min_and_max(
                values in prop::collection::vec(-1.0e6_f64..=1.0e6, 1..=64),
            ) {
                let n = values.len();
                let data = values.iter().map(|&v| DVec2::new(v, -v)).collect();
                let field = Field::from_data(n, 1, data).unwrap();
                let mean = field.mean_magnitude().unwrap();
                let lo = field.min_magnitude().unwrap();
                let hi = field.max_magnitude().unwrap();
                prop_assert!(lo <= mean + 1e-9 * hi.max(1.0));
                prop_assert!(mean <= hi + 1e-9 * hi.max(1.0));
            }
        }
    }
}
