//! Error types for the gravity-field core.

use thiserror::Error;

/// Errors produced while configuring, sampling, or rendering a field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The body list was empty; the sampling extent is undefined.
    #[error("no bodies: at least one body is required to sample a field")]
    NoBodies,

    /// Grid resolution was zero.
    #[error("invalid resolution: at least one sample per axis is required")]
    InvalidResolution,

    /// Limit factor was zero, negative, or not finite.
    #[error("invalid limit factor {0}: must be finite and greater than zero")]
    InvalidLimitFactor(f64),

    /// Angular velocity was NaN or infinite.
    #[error("invalid angular velocity {0}: must be finite")]
    InvalidAngularVelocity(f64),

    /// A body descriptor failed validation.
    #[error("invalid body #{index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    /// Every body sits at the origin with zero radius, so the grid would have
    /// zero extent.
    #[error("degenerate extent: all bodies are at the origin and have zero radius")]
    DegenerateExtent,

    /// Masking factor was zero, negative, or not finite.
    #[error("invalid masking factor {0}: must be finite and greater than zero")]
    InvalidMaskingFactor(f64),

    /// Width or height was zero when creating a field.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A data buffer did not match the declared field dimensions.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// An (i, j) index was outside the field bounds.
    #[error("index ({x}, {y}) out of bounds for field of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// No built-in palette has this name.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// No built-in scenario has this name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A scenario document could not be parsed.
    #[error("invalid scenario: {0}")]
    Scenario(String),

    /// Writing an image or reading a scenario file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::Scenario(e.to_string())
    }
}
