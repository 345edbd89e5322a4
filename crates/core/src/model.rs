//! Acceleration model for a frame co-rotating with a set of bodies.
//!
//! Every body contributes a gravity term that is linear inside its radius
//! (uniform density) and inverse-square outside it. The frame's rotation adds
//! a centrifugal term `ω² · r`. Velocity-dependent (Coriolis) terms are not
//! part of the model.
//!
//! Accelerations are 2-D vectors: `x` and `y` components in the same unit
//! system as the body parameters.

use crate::body::Body;
use glam::DVec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gravitational acceleration of `body` at `position`.
///
/// Inside the body (`r < radius`) the field is `-mu / radius³ · d`, falling
/// linearly to zero at the centre. At or beyond the surface it is
/// `-mu · d / r³`. The branches are selected per point, so the inside branch
/// is exact even at the centre.
///
/// A zero-radius body evaluated at its own position takes the outside branch
/// with `r = 0` and yields NaN components; the value is returned as-is.
pub fn acceleration_gravity(body: &Body, position: DVec2) -> DVec2 {
    let d = position - body.position;
    let r = d.length();
    if r < body.radius {
        d * (-body.mu / body.radius.powi(3))
    } else {
        d * (-body.mu / (r * r * r))
    }
}

/// Transport acceleration of a point at rest in a frame rotating at
/// `angular_velocity`: `-ω² · position`.
pub fn acceleration_transport(angular_velocity: f64, position: DVec2) -> DVec2 {
    -(angular_velocity * angular_velocity) * position
}

/// Net acceleration felt at rest in the rotating frame: the negated transport
/// term (outward centrifugal) plus the gravity of every body, summed in order.
pub fn acceleration_relative(bodies: &[Body], angular_velocity: f64, position: DVec2) -> DVec2 {
    bodies.iter().fold(
        -acceleration_transport(angular_velocity, position),
        |acc, body| acc + acceleration_gravity(body, position),
    )
}

/// Evaluates [`acceleration_relative`] for every position in one batch.
///
/// The buffer is seeded with the centrifugal term and each body's gravity is
/// then added across the whole buffer, so the only explicit loop is over the
/// bodies. The summation order matches the per-point function, and results
/// are bit-identical to it.
pub fn acceleration_relative_batch(
    bodies: &[Body],
    angular_velocity: f64,
    positions: &[DVec2],
) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = positions
        .iter()
        .map(|&p| -acceleration_transport(angular_velocity, p))
        .collect();
    for body in bodies {
        add_gravity(body, positions, &mut out);
    }
    out
}

#[cfg(not(feature = "parallel"))]
fn add_gravity(body: &Body, positions: &[DVec2], out: &mut [DVec2]) {
    out.iter_mut()
        .zip(positions)
        .for_each(|(a, &p)| *a += acceleration_gravity(body, p));
}

#[cfg(feature = "parallel")]
fn add_gravity(body: &Body, positions: &[DVec2], out: &mut [DVec2]) {
    out.par_iter_mut()
        .zip(positions.par_iter())
        .for_each(|(a, &p)| *a += acceleration_gravity(body, p));
}
