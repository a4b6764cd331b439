//! Projectile flight: launch, wall bounces, collision.
//!
//! The projectile starts at the launch point and advances a fixed distance
//! (`speed`) per micro-step along its launch angle. Angles are measured in
//! degrees from the left: below 90 the projectile drifts left, above 90 it
//! drifts right, and exactly 90 goes straight up.
//!
//! After every micro-step:
//! 1. If the projectile overlaps a side wall while moving toward it, the
//!    angle is mirrored to `180 − angle`.
//! 2. The flight ends when the projectile touches the ceiling or comes
//!    closer than `2r` to any placed bubble.
//!
//! Mirroring keeps `sin(angle)`, so the upward progress per step is
//! constant. That gives an exact bound on the number of steps a valid
//! flight can take.

use glam::DVec2;
use log::{trace, warn};

use crate::board::{BoardGeometry, CellCoord, Grid};
use crate::core::{ColorId, EngineError, EngineResult};

/// Extra steps allowed on top of the computed flight bound.
const STEP_SLACK: usize = 2;

/// Flights are capped at this many window heights of travel. Any angle of
/// at least 1° reaches the ceiling well within it.
const FLIGHT_CAP_WINDOWS: f64 = 64.0;

/// What stopped the projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Reached the ceiling.
    Ceiling,
    /// Touched the placed bubble at this cell (first in row-major order).
    Bubble(CellCoord),
}

/// A completed flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    /// Color of the projectile.
    pub color: ColorId,
    /// Angle the projectile was launched at.
    pub launch_angle: f64,
    /// Angle after the last bounce.
    pub final_angle: f64,
    /// Position where the collision was detected.
    pub position: DVec2,
    /// Every intermediate position, in order, ending with `position`.
    pub path: Vec<DVec2>,
    /// Number of wall bounces.
    pub bounces: u32,
    /// What the projectile hit.
    pub contact: Contact,
}

impl Flight {
    /// Number of micro-steps flown.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// Reject angles outside the open interval (0, 180).
pub fn validate_angle(angle: f64) -> EngineResult<()> {
    if angle.is_finite() && angle > 0.0 && angle < 180.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidAction { angle })
    }
}

/// Displacement of one micro-step at `angle` degrees.
#[must_use]
pub fn step_vector(angle: f64, speed: f64) -> DVec2 {
    if angle == 90.0 {
        DVec2::new(0.0, -speed)
    } else if angle < 90.0 {
        let rad = angle.to_radians();
        DVec2::new(-rad.cos() * speed, -rad.sin() * speed)
    } else {
        let rad = (180.0 - angle).to_radians();
        DVec2::new(rad.cos() * speed, -rad.sin() * speed)
    }
}

/// Upper bound on the micro-steps a flight at `angle` can take.
#[must_use]
pub fn max_steps(geometry: &BoardGeometry, angle: f64, speed: f64) -> usize {
    let rise = geometry.launch_point().y - geometry.ceiling() - geometry.radius();
    let per_step = step_vector(angle, speed).y.abs();
    if per_step <= f64::EPSILON || !rise.is_finite() {
        return STEP_SLACK;
    }
    let cap = (geometry.window_height() * FLIGHT_CAP_WINDOWS / speed).ceil() as usize;
    ((rise.max(0.0) / per_step).ceil() as usize).min(cap) + STEP_SLACK
}

/// Mirror the angle if the projectile overlaps a wall it is moving toward.
fn bounce(geometry: &BoardGeometry, position: DVec2, angle: f64, speed: f64) -> Option<f64> {
    let (left, right) = geometry.walls();
    let r = geometry.radius();
    let dx = step_vector(angle, speed).x;

    let hits_left = position.x - r <= left && dx < 0.0;
    let hits_right = position.x + r >= right && dx > 0.0;
    (hits_left || hits_right).then_some(180.0 - angle)
}

/// Check whether a projectile centered at `position` has collided.
#[must_use]
pub fn detect_collision(grid: &Grid, position: DVec2) -> Option<Contact> {
    let geometry = grid.geometry();
    let r = geometry.radius();

    if position.y - r <= geometry.ceiling() {
        return Some(Contact::Ceiling);
    }

    let reach = 2.0 * r;
    grid.occupied()
        .map(|(coord, _)| coord)
        .find(|&coord| {
            geometry
                .center(coord)
                .is_some_and(|center| center.distance(position) < reach)
        })
        .map(Contact::Bubble)
}

/// Fly a projectile of `color` from the launch point at `angle` degrees.
///
/// The grid is only read; placement is a separate step.
pub fn simulate(grid: &Grid, color: ColorId, angle: f64, speed: f64) -> EngineResult<Flight> {
    validate_angle(angle)?;

    let geometry = grid.geometry();
    let limit = max_steps(geometry, angle, speed);
    let mut position = geometry.launch_point();
    let mut current = angle;
    let mut bounces = 0;
    let mut path = Vec::with_capacity(limit.min(4096));

    for _ in 0..limit {
        position += step_vector(current, speed);
        if let Some(mirrored) = bounce(geometry, position, current, speed) {
            trace!("bounce at ({:.1}, {:.1}): {} -> {}", position.x, position.y, current, mirrored);
            current = mirrored;
            bounces += 1;
        }
        path.push(position);

        if let Some(contact) = detect_collision(grid, position) {
            trace!("flight at {} ended after {} steps: {:?}", angle, path.len(), contact);
            return Ok(Flight {
                color,
                launch_angle: angle,
                final_angle: current,
                position,
                path,
                bounces,
                contact,
            });
        }
    }

    warn!("flight at {} did not collide within {} steps", angle, limit);
    Err(EngineError::FlightDidNotTerminate { steps: limit })
}
