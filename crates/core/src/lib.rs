#![deny(unsafe_code)]
//! Core types for the gravity-field workspace.
//!
//! Computes the acceleration felt at rest in a frame co-rotating with a set of
//! massive bodies: the [`model`] functions evaluate gravity plus centrifugal
//! acceleration at a point, and [`FieldSampler`] evaluates them over a square
//! [`Grid`] into a [`Field`] of vectors. [`Scenario`] bundles a reproducible
//! configuration that round-trips through JSON.

pub mod body;
pub mod error;
pub mod field;
pub mod grid;
pub mod model;
pub mod sampler;
pub mod scenario;

pub use body::{Body, FieldConfig};
pub use error::FieldError;
pub use field::Field;
pub use grid::Grid;
pub use model::{
    acceleration_gravity, acceleration_relative, acceleration_relative_batch,
    acceleration_transport,
};
pub use sampler::{FieldSampler, SamplingParams};
pub use scenario::Scenario;

pub use glam::DVec2;
