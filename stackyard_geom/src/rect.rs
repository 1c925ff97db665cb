// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotated rectangles: corner expansion, containment, and SAT overlap.

use kurbo::{Point, Vec2};

/// A rectangle defined by its center point, extents along its own axes, and a
/// rotation about the center.
///
/// `width` runs along the rectangle's local x axis and `length` along its
/// local y axis. `angle` is in degrees, counter-clockwise. This is the
/// footprint representation for every placed object in a yard: the plan-view
/// projection that placement and collision work against.
///
/// All coordinates are assumed finite. Construction via [`CenteredRect::new`]
/// checks this in debug builds; the predicates themselves never fail.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CenteredRect {
    /// Center of the rectangle in plan coordinates.
    pub center: Point,
    /// Extent along the rectangle's local x axis.
    pub width: f64,
    /// Extent along the rectangle's local y axis.
    pub length: f64,
    /// Rotation about the center, in degrees counter-clockwise.
    pub angle: f64,
}

impl CenteredRect {
    /// Create a rectangle from center, extents, and rotation in degrees.
    pub fn new(center: Point, width: f64, length: f64, angle: f64) -> Self {
        debug_assert!(
            center.is_finite() && width.is_finite() && length.is_finite() && angle.is_finite(),
            "CenteredRect requires finite coordinates"
        );
        Self {
            center,
            width,
            length,
            angle,
        }
    }

    /// The rectangle's local axes as unit vectors in world space.
    ///
    /// The first runs along `width`, the second along `length`. These are
    /// also the edge normals, so they double as the SAT projection axes.
    fn axes(&self) -> (Vec2, Vec2) {
        let u = Vec2::from_angle(self.angle.to_radians());
        (u, Vec2::new(-u.y, u.x))
    }

    /// World-space corners in counter-clockwise order.
    pub fn corners(&self) -> [Point; 4] {
        let (u, v) = self.axes();
        let hw = u * (self.width / 2.0);
        let hl = v * (self.length / 2.0);
        [
            self.center - hw - hl,
            self.center + hw - hl,
            self.center + hw + hl,
            self.center - hw + hl,
        ]
    }

    /// Whether the rectangle has no interior (zero width or length).
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.length <= 0.0
    }

    /// Whether `point` lies inside the rectangle, boundary included.
    ///
    /// The point is taken into the rectangle's local frame (translate by the
    /// negative center, rotate by the negative angle) and tested against the
    /// closed interval box `[-width/2, width/2] x [-length/2, length/2]`.
    pub fn contains(&self, point: Point) -> bool {
        let (u, v) = self.axes();
        let d = point - self.center;
        d.dot(u).abs() <= self.width / 2.0 && d.dot(v).abs() <= self.length / 2.0
    }

    /// True if the interiors of the two rectangles overlap.
    ///
    /// Separating Axis Theorem over the four edge-normal axes (two per
    /// rectangle; opposite edges are parallel and share an axis). Touching
    /// along an edge or at a corner is not overlap, and degenerate rectangles
    /// never overlap. `overlaps` is symmetric in its arguments.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let ca = self.corners();
        let cb = other.corners();
        let (au, av) = self.axes();
        let (bu, bv) = other.axes();
        for axis in [au, av, bu, bv] {
            let (min_a, max_a) = project(&ca, axis);
            let (min_b, max_b) = project(&cb, axis);
            if max_a <= min_b || max_b <= min_a {
                return false;
            }
        }
        true
    }
}

/// Project corners onto an axis, returning the (min, max) interval.
fn project(corners: &[Point; 4], axis: Vec2) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for c in corners {
        let dot = c.to_vec2().dot(axis);
        if dot < lo {
            lo = dot;
        }
        if dot > hi {
            hi = dot;
        }
    }
    (lo, hi)
}

/// Snap a plan position to the nearest intersection of a square grid.
///
/// `grid` is the grid spacing and must be positive. Snapped coordinates are
/// assumed to fit in `i64` grid steps.
pub fn snap_to_grid(point: Point, grid: f64) -> Point {
    debug_assert!(grid > 0.0, "grid spacing must be positive");
    Point::new(
        round_to_nearest(point.x / grid) * grid,
        round_to_nearest(point.y / grid) * grid,
    )
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "f64::round is unavailable in core; grid steps fit in i64 by contract."
)]
fn round_to_nearest(v: f64) -> f64 {
    let shifted = if v < 0.0 { v - 0.5 } else { v + 0.5 };
    (shifted as i64) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate_about(p: Point, pivot: Point, degrees: f64) -> Point {
        let u = Vec2::from_angle(degrees.to_radians());
        let d = p - pivot;
        pivot + Vec2::new(d.x * u.x - d.y * u.y, d.x * u.y + d.y * u.x)
    }

    #[test]
    fn contains_axis_aligned() {
        let r = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 2.0, 0.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(1.9, 0.9)));
        assert!(r.contains(Point::new(2.0, 1.0)), "boundary is inclusive");
        assert!(!r.contains(Point::new(2.1, 0.0)));
        assert!(!r.contains(Point::new(0.0, 1.1)));
    }

    #[test]
    fn contains_rotated() {
        // A 4x2 rectangle rotated 90 degrees: width now runs along world y.
        let r = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 2.0, 90.0);
        assert!(r.contains(Point::new(0.0, 1.9)));
        assert!(!r.contains(Point::new(1.9, 0.0)));
        // 45 degrees: the corner reaches out along the diagonal.
        let r = CenteredRect::new(Point::new(0.0, 0.0), 2.0, 2.0, 45.0);
        assert!(r.contains(Point::new(1.2, 0.0)));
        assert!(!r.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn overlap_matches_aabb_test_at_zero_rotation() {
        let a = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 2.0, 0.0);
        let cases = [
            (Point::new(3.0, 0.0), 4.0, 2.0, true),  // x-overlap 1.0
            (Point::new(4.0, 0.0), 4.0, 2.0, false), // x-touch
            (Point::new(5.0, 0.0), 4.0, 2.0, false), // x-gap
            (Point::new(0.0, 1.5), 4.0, 2.0, true),  // y-overlap 0.5
            (Point::new(0.0, 2.0), 4.0, 2.0, false), // y-touch
            (Point::new(3.9, 1.9), 4.0, 2.0, true),  // overlap in both
        ];
        for (center, w, l, expected) in cases {
            let b = CenteredRect::new(center, w, l, 0.0);
            let aabb = (a.center.x - a.width / 2.0) < (b.center.x + b.width / 2.0)
                && (b.center.x - b.width / 2.0) < (a.center.x + a.width / 2.0)
                && (a.center.y - a.length / 2.0) < (b.center.y + b.length / 2.0)
                && (b.center.y - b.length / 2.0) < (a.center.y + a.length / 2.0);
            assert_eq!(a.overlaps(&b), expected);
            assert_eq!(a.overlaps(&b), aabb, "SAT must agree with interval test");
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (
                CenteredRect::new(Point::new(0.0, 0.0), 4.0, 2.0, 30.0),
                CenteredRect::new(Point::new(2.0, 1.0), 3.0, 3.0, -15.0),
            ),
            (
                CenteredRect::new(Point::new(0.0, 0.0), 1.0, 1.0, 0.0),
                CenteredRect::new(Point::new(10.0, 0.0), 1.0, 1.0, 45.0),
            ),
            (
                CenteredRect::new(Point::new(0.0, 0.0), 2.0, 2.0, 45.0),
                CenteredRect::new(Point::new(1.5, 0.0), 2.0, 2.0, 45.0),
            ),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn rotated_separation_that_aabbs_miss() {
        // Two unit squares rotated 45 degrees, diagonal to each other: their
        // axis-aligned bounds intersect but the rectangles do not.
        let a = CenteredRect::new(Point::new(0.0, 0.0), 2.0, 2.0, 45.0);
        let b = CenteredRect::new(Point::new(2.2, 2.2), 2.0, 2.0, 45.0);
        assert!(!a.overlaps(&b));
        // Slide one closer along the diagonal until they genuinely meet.
        let c = CenteredRect::new(Point::new(1.2, 1.2), 2.0, 2.0, 45.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn sliver_overlap_detected_corner_touch_rejected() {
        let a = CenteredRect::new(Point::new(0.0, 0.0), 2.0, 2.0, 0.0);
        // 0.01-unit sliver of overlap along x.
        let sliver = CenteredRect::new(Point::new(1.99, 0.0), 2.0, 2.0, 0.0);
        assert!(a.overlaps(&sliver));
        // Bounding boxes meet only at the single corner (1, 1).
        let corner = CenteredRect::new(Point::new(2.0, 2.0), 2.0, 2.0, 0.0);
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn rotation_invariance() {
        let pivot = Point::new(3.0, -2.0);
        let a0 = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 2.0, 10.0);
        let b0 = CenteredRect::new(Point::new(2.5, 0.5), 3.0, 1.0, -20.0);
        let p0 = Point::new(1.0, 0.4);
        for turn in [30.0, 90.0, 137.5, 250.0] {
            let a = CenteredRect::new(rotate_about(a0.center, pivot, turn), 4.0, 2.0, 10.0 + turn);
            let b = CenteredRect::new(
                rotate_about(b0.center, pivot, turn),
                3.0,
                1.0,
                -20.0 + turn,
            );
            let p = rotate_about(p0, pivot, turn);
            assert_eq!(a.overlaps(&b), a0.overlaps(&b0));
            assert_eq!(a.contains(p), a0.contains(p0));
        }
    }

    #[test]
    fn degenerate_rects_never_overlap() {
        let fat = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 4.0, 0.0);
        let line = CenteredRect::new(Point::new(0.0, 0.0), 0.0, 4.0, 0.0);
        let dot = CenteredRect::new(Point::new(0.0, 0.0), 0.0, 0.0, 0.0);
        assert!(!fat.overlaps(&line));
        assert!(!line.overlaps(&fat));
        assert!(!dot.overlaps(&dot));
        // Containment still works on the boundary of a degenerate rect.
        assert!(line.contains(Point::new(0.0, 1.0)));
    }

    #[test]
    fn coincident_rects_overlap() {
        let a = CenteredRect::new(Point::new(1.0, 2.0), 2.0, 2.0, 30.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn snap_to_grid_rounds_to_nearest() {
        let g = 2.0;
        assert_eq!(snap_to_grid(Point::new(0.9, 1.1), g), Point::new(0.0, 2.0));
        assert_eq!(snap_to_grid(Point::new(3.0, 3.0), g), Point::new(4.0, 4.0));
        assert_eq!(
            snap_to_grid(Point::new(-0.9, -1.1), g),
            Point::new(0.0, -2.0)
        );
        assert_eq!(snap_to_grid(Point::new(4.0, -4.0), g), Point::new(4.0, -4.0));
    }
}
