// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The yard vehicle: a simple kinematic object driven in small steps.

use kurbo::{Point, Vec2};
use stackyard_geom::CenteredRect;

/// Distance covered by one [`Lift::advance`] or [`Lift::reverse`] step.
const STEP: f64 = 0.2;

/// Degrees turned by one [`Lift::turn_left`] or [`Lift::turn_right`] step.
const TURN: f64 = 4.0;

/// The lift truck that drives around the yard.
///
/// A separately positioned and rotated vehicle with forward/backward/turn
/// operations. It takes no part in collision or stacking; the editor only
/// draws it and steps it from key presses. Angle 0 points the lift along the
/// positive y axis ("up" in plan view), and turning right increases the
/// angle, matching the on-screen convention.
#[derive(Clone, Debug, PartialEq)]
pub struct Lift {
    /// Plan-view center position.
    pub position: Point,
    /// Heading in degrees, in `[0, 360)`.
    pub angle: f64,
    /// Footprint extent across the vehicle.
    pub width: f64,
    /// Footprint extent along the vehicle.
    pub length: f64,
}

impl Default for Lift {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            angle: 0.0,
            width: 2.0,
            length: 3.0,
        }
    }
}

impl Lift {
    /// Unit vector the lift is facing: 90 degrees minus the angle, so that
    /// angle 0 faces positive y and angles grow clockwise on screen.
    fn heading(&self) -> Vec2 {
        Vec2::from_angle((90.0 - self.angle).to_radians())
    }

    /// Drive one step forward along the heading.
    pub fn advance(&mut self) {
        self.position += self.heading() * STEP;
    }

    /// Drive one step backward along the heading.
    pub fn reverse(&mut self) {
        self.position -= self.heading() * STEP;
    }

    /// Turn one step clockwise.
    pub fn turn_right(&mut self) {
        self.angle = (self.angle + TURN).rem_euclid(360.0);
    }

    /// Turn one step counter-clockwise.
    pub fn turn_left(&mut self) {
        self.angle = (self.angle - TURN).rem_euclid(360.0);
    }

    /// The plan-view rectangle the lift occupies (for drawing).
    pub fn footprint(&self) -> CenteredRect {
        CenteredRect::new(self.position, self.width, self.length, self.angle)
    }
}
