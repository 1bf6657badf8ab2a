//! Tick layout on the unit square.
//!
//! Ticks sit on a circle centred at `(0.5, 0.5)` with y pointing up. Tick 0 is at
//! 12 o'clock and indices increase clockwise; the ring carries one extra point so
//! that the last index lands back on tick 0.

use crate::error::{Result, require_positive, require_positive_finite};
use derive_more::{AsRef, Deref, Display};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Add, Div, Mul, Sub};

pub const CENTER: Point = Point::new(0.5, 0.5);
pub const START_ANGLE: f64 = 2.5 * PI;
pub const END_ANGLE: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Display)]
#[display("({x:.4}, {y:.4})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Counter-clockwise normal of a direction vector.
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle of `self` seen from `origin`, in `[0, 2π)`.
    pub fn angle_from(self, origin: Point) -> f64 {
        let d = self - origin;
        d.y.atan2(d.x).rem_euclid(TAU)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// `tick_count + 1` points around the circle; index 0 and index `tick_count` coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deref, AsRef)]
pub struct TickRing {
    #[deref]
    #[as_ref]
    points: Vec<Point>,
    radius: f64,
}

impl TickRing {
    pub fn tick_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Angle of tick `index`, normalized into `[0, 2π)`.
    pub fn angle(&self, index: usize) -> Option<f64> {
        (index <= self.tick_count()).then(|| tick_angle(index, self.tick_count()).rem_euclid(TAU))
    }
}

/// Sweeps linearly from `2.5π` down to `π/2`; the final angle is pinned to `π/2` exactly.
fn tick_angle(index: usize, tick_count: usize) -> f64 {
    if index == tick_count {
        return END_ANGLE;
    }
    let step = (END_ANGLE - START_ANGLE) / tick_count as f64;
    START_ANGLE + index as f64 * step
}

pub fn layout(tick_count: i64, radius: f64) -> Result<TickRing> {
    let n = require_positive("tick_count", tick_count)?;
    let radius = require_positive_finite("radius", radius)?;

    let points = (0..=n)
        .map(|i| Point::polar(CENTER, radius, tick_angle(i, n)))
        .collect();

    Ok(TickRing { points, radius })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingError;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Signed difference folded into `(-π, π]`.
    fn angular_gap(a: f64, b: f64) -> f64 {
        (a - b + PI).rem_euclid(TAU) - PI
    }

    #[test]
    fn test_ring_closure() {
        for n in 1..=60 {
            let ring = layout(n, 0.45).unwrap();
            let (first, last) = (ring[0], ring[n as usize]);
            assert!(close(first.x, last.x) && close(first.y, last.y), "n = {n}");
        }
    }

    #[test]
    fn test_point_count_and_radius() {
        let ring = layout(12, 0.3).unwrap();
        assert_eq!(ring.len(), 13);
        assert_eq!(ring.tick_count(), 12);
        assert_eq!(ring.radius(), 0.3);
        for p in ring.points() {
            assert!(close(p.distance(CENTER), 0.3));
        }
    }

    #[test]
    fn test_starts_at_twelve_and_turns_clockwise() {
        let ring = layout(4, 0.45).unwrap();
        let cases = vec![
            (0, Point::new(0.5, 0.95)),
            (1, Point::new(0.95, 0.5)),
            (2, Point::new(0.5, 0.05)),
            (3, Point::new(0.05, 0.5)),
        ];

        for (i, expected) in cases {
            assert!(
                close(ring[i].x, expected.x) && close(ring[i].y, expected.y),
                "tick {i}: {} != {}",
                ring[i],
                expected
            );
        }
    }

    #[test]
    fn test_equal_spacing() {
        for n in [1usize, 2, 3, 5, 7, 50, 500] {
            let ring = layout(n as i64, 0.45).unwrap();
            let expected = TAU / n as f64;
            for i in 0..n {
                let a = ring.angle(i).unwrap();
                let b = ring.angle(i + 1).unwrap();
                assert!(
                    angular_gap(a - b, expected).abs() < 1e-9,
                    "n = {n}, i = {i}"
                );
                let chord = ring[i].distance(ring[i + 1]);
                assert!((chord - 2.0 * 0.45 * (PI / n as f64).sin()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_angles_are_normalized() {
        let ring = layout(7, 0.45).unwrap();
        for i in 0..=7 {
            let angle = ring.angle(i).unwrap();
            assert!((0.0..TAU).contains(&angle));
            assert!(angular_gap(angle, ring[i].angle_from(CENTER)).abs() < 1e-9);
        }
        assert_eq!(ring.angle(8), None);
    }

    #[test]
    fn test_single_tick_is_degenerate_point() {
        let ring = layout(1, 0.45).unwrap();
        assert_eq!(ring.len(), 2);
        assert!(close(ring[0].x, 0.5) && close(ring[0].y, 0.95));
        assert!(close(ring[0].distance(ring[1]), 0.0));
    }

    #[test]
    fn test_invalid_input() {
        let cases = vec![
            (0, 0.45, "tick_count"),
            (-3, 0.45, "tick_count"),
            (5, 0.0, "radius"),
            (5, -1.0, "radius"),
            (5, f64::NAN, "radius"),
        ];

        for (n, r, name) in cases {
            let err = layout(n, r).unwrap_err();
            assert!(matches!(err, RingError::InvalidParameter { .. }));
            assert_eq!(err.parameter(), name);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = layout(97, 0.45).unwrap();
        let b = layout(97, 0.45).unwrap();
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }
}
