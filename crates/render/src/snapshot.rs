//! PNG output of a field magnitude plot.
//!
//! Feature-gated behind `png` (default on) so that library users who only
//! need the RGBA buffer from [`crate::pixel`] do not pull in the `image`
//! crate.

use gravity_field_core::{Field, FieldError};
use std::path::Path;

use crate::contour::ContourStyle;
use crate::palette::Palette;
use crate::pixel::field_to_rgba;

/// Writes the field magnitude as a PNG contour image.
///
/// Returns `FieldError::InvalidDimensions` if the field dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(
    field: &Field,
    palette: &Palette,
    style: &ContourStyle,
    path: &Path,
) -> Result<(), FieldError> {
    let rgba = field_to_rgba(field, palette, style)?;
    let w = u32::try_from(field.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| FieldError::Io(format!("{}: {e}", path.display())))?;
    log::info!("wrote {}x{} plot to {}", w, h, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravity_field_core::{FieldSampler, Scenario};

    #[test]
    fn write_png_produces_image_of_field_size() {
        let mut scenario = Scenario::earth_moon();
        scenario.resolution = 24;
        let sampler = FieldSampler::from_scenario(&scenario).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("earth_moon.png");

        write_png(
            sampler.field(),
            &Palette::viridis(),
            &ContourStyle::default(),
            &path,
        )
        .unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 24);
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let field = Field::new(2, 2).unwrap();
        let path = Path::new("/no/such/dir/out.png");
        let style = ContourStyle::default();
        let err = write_png(&field, &Palette::viridis(), &style, path).unwrap_err();
        assert!(matches!(err, FieldError::Io(_)));
    }
}
