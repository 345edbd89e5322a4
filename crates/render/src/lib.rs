#![deny(unsafe_code)]
//! Rendering of sampled acceleration fields.
//!
//! Sits downstream of `gravity-field-core`: takes a finished [`Field`] and
//! turns its magnitude into a contour image. The colour scale is capped at
//! `mean(|g|) / masking_factor` so the singular neighbourhoods of the bodies
//! do not wash out the rest of the plot.
//!
//! [`Field`]: gravity_field_core::Field

pub mod contour;
pub mod palette;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use contour::{color_ceiling, ContourMode, ContourStyle};
pub use palette::{Palette, Srgb};
pub use pixel::field_to_rgba;
