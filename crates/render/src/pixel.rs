//! Pure-computation RGBA conversion of a field's magnitude.
//!
//! Image row 0 is the top of the plot (largest y), column 0 the left edge
//! (smallest x), so the picture reads like a conventional x/y plot.

use crate::contour::{color_ceiling, ContourMode, ContourStyle};
use crate::palette::{Palette, Srgb};
use gravity_field_core::{Field, FieldError};

/// Maps `|field|` through `palette` to an RGBA8 buffer of
/// `width * height * 4` bytes.
///
/// Returns `FieldError::InvalidMaskingFactor` if the style's masking factor
/// is not a positive finite number.
pub fn field_to_rgba(
    field: &Field,
    palette: &Palette,
    style: &ContourStyle,
) -> Result<Vec<u8>, FieldError> {
    let ceiling = color_ceiling(field, style.masking_factor)?;
    let magnitudes = field.magnitudes();
    let (w, h) = (field.width(), field.height());
    // Flip rows so that y grows upward in the image.
    let at = |col: usize, row: usize| magnitudes[(h - 1 - row) * w + col];

    let mut rgba = Vec::with_capacity(w * h * 4);
    for row in 0..h {
        for col in 0..w {
            let color = match style.mode {
                ContourMode::Fill => palette.sample(style.scale(at(col, row), ceiling)),
                ContourMode::Lines => {
                    let here = style.level(at(col, row), ceiling);
                    let right = (col + 1 < w).then(|| style.level(at(col + 1, row), ceiling));
                    let below = (row + 1 < h).then(|| style.level(at(col, row + 1), ceiling));
                    let edge = [right, below].into_iter().flatten().find(|&l| l != here);
                    match edge {
                        Some(other) => {
                            let top = style.levels.max(1) as f64;
                            palette.sample(here.max(other) as f64 / top)
                        }
                        None => Srgb::WHITE,
                    }
                }
            };
            let [r, g, b] = color.to_rgb8();
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Ok(rgba)
}
