//! Massive bodies and the rotating-frame configuration they live in.
//!
//! All quantities must share one unit system: a `mu` in m³/s² with positions
//! in km, or an angular velocity in rad/day with everything else in SI, will
//! silently produce nonsense.

use crate::error::FieldError;
use crate::model;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A massive body treated as a uniform-density disk for field evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Gravitational parameter (G · mass), length³/time².
    pub mu: f64,
    /// Location in the rotating frame. Serialized as `[x, y]`.
    pub position: DVec2,
    /// Radius below which the interior (linear) field applies.
    #[serde(default)]
    pub radius: f64,
}

impl Body {
    /// Creates a validated body.
    ///
    /// Returns `FieldError::InvalidBody` if any value is non-finite, `mu` is
    /// negative, or `radius` is negative. A zero `mu` is accepted.
    pub fn new(mu: f64, position: DVec2, radius: f64) -> Result<Self, FieldError> {
        let body = Self {
            mu,
            position,
            radius,
        };
        body.validate(0)?;
        Ok(body)
    }

    /// Checks the body invariants, reporting `index` in the error.
    pub fn validate(&self, index: usize) -> Result<(), FieldError> {
        let reason = if !self.mu.is_finite() || self.mu < 0.0 {
            format!("mu must be finite and non-negative, got {}", self.mu)
        } else if !self.position.is_finite() {
            format!("position must be finite, got {}", self.position)
        } else if !self.radius.is_finite() || self.radius < 0.0 {
            format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )
        } else {
            return Ok(());
        };
        Err(FieldError::InvalidBody { index, reason })
    }
}

/// The bodies and the rotation rate of the frame they are viewed in.
///
/// The accelerations derived from this configuration are those felt by an
/// object at rest in the rotating frame. For a moving object, subtract the
/// Coriolis acceleration `2 ω × v` yourself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub bodies: Vec<Body>,
    /// Frame rotation rate, rad/time.
    pub angular_velocity: f64,
}

impl FieldConfig {
    pub fn new(bodies: Vec<Body>, angular_velocity: f64) -> Self {
        Self {
            bodies,
            angular_velocity,
        }
    }

    /// Validates every body and the angular velocity.
    ///
    /// Returns `FieldError::NoBodies` for an empty body list.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.bodies.is_empty() {
            return Err(FieldError::NoBodies);
        }
        if !self.angular_velocity.is_finite() {
            return Err(FieldError::InvalidAngularVelocity(self.angular_velocity));
        }
        self.bodies
            .iter()
            .enumerate()
            .try_for_each(|(i, b)| b.validate(i))
    }

    /// Net acceleration at `position`: gravity of every body plus the
    /// centrifugal term.
    pub fn acceleration_at(&self, position: DVec2) -> DVec2 {
        model::acceleration_relative(&self.bodies, self.angular_velocity, position)
    }

    /// Largest distance of any body from the origin.
    pub fn max_distance(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.position.length())
            .fold(0.0, f64::max)
    }

    /// Largest body radius.
    pub fn max_radius(&self) -> f64 {
        self.bodies.iter().map(|b| b.radius).fold(0.0, f64::max)
    }
}
