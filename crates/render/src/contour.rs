//! Contour styling: colour-scale ceiling and level banding.
//!
//! Field magnitudes diverge near point masses and are large inside bodies,
//! so the colour scale runs from 0 to `mean(|g|) / masking_factor` rather
//! than to the maximum. Everything above the ceiling saturates.

use gravity_field_core::scenario::DEFAULT_MASKING_FACTOR;
use gravity_field_core::{Field, FieldError};

/// Default number of contour bands between 0 and the ceiling.
pub const DEFAULT_LEVELS: usize = 16;

/// How contours are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourMode {
    /// Each band is filled with its colour.
    #[default]
    Fill,
    /// Only band boundaries are drawn, coloured by level, on white.
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourStyle {
    pub mode: ContourMode,
    /// Divisor applied to the mean magnitude; larger values lower the
    /// ceiling.
    pub masking_factor: f64,
    /// Number of bands; `0` disables banding and gives a continuous scale.
    pub levels: usize,
}

impl Default for ContourStyle {
    fn default() -> Self {
        Self {
            mode: ContourMode::Fill,
            masking_factor: DEFAULT_MASKING_FACTOR,
            levels: DEFAULT_LEVELS,
        }
    }
}

impl ContourStyle {
    /// Maps a magnitude to a band index in `0..=levels`. Values at or above
    /// the ceiling, and non-finite values, land in the top band.
    pub fn level(&self, magnitude: f64, ceiling: f64) -> usize {
        let levels = self.levels.max(1);
        if !magnitude.is_finite() || magnitude >= ceiling {
            return levels;
        }
        ((magnitude / ceiling) * levels as f64).floor().max(0.0) as usize
    }

    /// Position on the palette in [0, 1] for a magnitude.
    pub fn scale(&self, magnitude: f64, ceiling: f64) -> f64 {
        if !magnitude.is_finite() {
            return 1.0;
        }
        let t = (magnitude / ceiling).clamp(0.0, 1.0);
        if self.levels == 0 {
            t
        } else {
            self.level(magnitude, ceiling) as f64 / self.levels as f64
        }
    }
}

/// Colour-scale ceiling: the mean finite magnitude divided by
/// `masking_factor`.
///
/// Returns `FieldError::InvalidMaskingFactor` unless the factor is finite and
/// positive. A field with no finite, non-zero samples yields a ceiling of 1.
pub fn color_ceiling(field: &Field, masking_factor: f64) -> Result<f64, FieldError> {
    if !masking_factor.is_finite() || masking_factor <= 0.0 {
        return Err(FieldError::InvalidMaskingFactor(masking_factor));
    }
    Ok(match field.mean_magnitude() {
        Some(mean) if mean > 0.0 => mean / masking_factor,
        _ => 1.0,
    })
}
