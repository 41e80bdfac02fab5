//! Trajectories and per-axis normalization.
//!
//! A [`Trajectory`] is the ordered sequence of states produced by repeated
//! integration steps. Before rendering, each trajectory is rescaled into a
//! common `[0, upper_limit]` cube with [`Trajectory::normalize`] so that
//! curves from different initial conditions share one coordinate frame.
//!
//! Normalization is per-axis: each axis is stretched independently by its own
//! observed extrema, so the visual shape is not an isometric copy of the phase
//! space. An axis along which the trajectory never moves has no defined scale;
//! that case is reported as [`NormalizeError::DegenerateAxis`] rather than
//! letting a division by zero leak NaN into the renderer.

use std::fmt;

use glam::Vec3;

use crate::error::NormalizeError;

/// A coordinate axis of phase space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Per-axis extrema of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Extent of the bounds along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

/// An ordered sequence of 3D states.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Vec3>,
}

impl Trajectory {
    /// Wrap an existing point sequence.
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying points, in integration order.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Per-axis min/max over the whole trajectory, in a single pass.
    ///
    /// Returns `None` for an empty trajectory.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Bounds { min, max })
    }

    /// Rescale each axis independently into `[0, upper_limit]`.
    ///
    /// The point attaining an axis minimum maps to 0 on that axis and the
    /// point attaining the maximum maps to `upper_limit`. The output has the
    /// same length as the input and the operation is (approximately)
    /// idempotent.
    ///
    /// Fails with [`NormalizeError::DegenerateAxis`] when an axis has no
    /// positive extent - including the non-finite extents left behind by a
    /// diverged trajectory - and with [`NormalizeError::EmptyTrajectory`] for
    /// an empty input.
    pub fn normalize(&self, upper_limit: f32) -> Result<Trajectory, NormalizeError> {
        let bounds = self.bounds().ok_or(NormalizeError::EmptyTrajectory)?;
        let extent = bounds.extent();

        for (axis, range) in [(Axis::X, extent.x), (Axis::Y, extent.y), (Axis::Z, extent.z)] {
            if !(range > 0.0) || !range.is_finite() {
                return Err(NormalizeError::DegenerateAxis(axis));
            }
        }

        let scale = Vec3::splat(upper_limit) / extent;
        let points = self
            .points
            .iter()
            .map(|p| (*p - bounds.min) * scale)
            .collect();
        Ok(Trajectory::from_points(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        Trajectory::from_points(vec![
            Vec3::new(-1.0, 0.0, 10.0),
            Vec3::new(0.0, 2.0, 20.0),
            Vec3::new(3.0, 4.0, 30.0),
        ])
    }

    #[test]
    fn test_bounds_single_pass() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, 10.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 4.0, 30.0));
        assert_eq!(bounds.extent(), Vec3::new(4.0, 4.0, 20.0));

        assert!(Trajectory::from_points(vec![]).bounds().is_none());
    }

    #[test]
    fn test_normalize_maps_extrema() {
        let upper = 50.0;
        let norm = sample().normalize(upper).unwrap();
        let points = norm.points();

        assert_eq!(points.len(), 3);
        // First point attains the minimum on every axis, last the maximum.
        assert_eq!(points[0], Vec3::ZERO);
        assert!((points[2] - Vec3::splat(upper)).length() < 1e-4);
        // Everything in range.
        for p in points {
            assert!(p.min_element() >= 0.0 && p.max_element() <= upper);
        }
    }

    #[test]
    fn test_normalize_is_independent_per_axis() {
        // A mid point that is not at the same fraction on each axis.
        let traj = Trajectory::from_points(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 5.0, 9.0),
            Vec3::new(4.0, 10.0, 10.0),
        ]);
        let norm = traj.normalize(1.0).unwrap();
        let mid = norm.points()[1];
        assert!((mid.x - 0.25).abs() < 1e-6);
        assert!((mid.y - 0.5).abs() < 1e-6);
        assert!((mid.z - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_idempotent() {
        let upper = 50.0;
        let once = sample().normalize(upper).unwrap();
        let twice = once.normalize(upper).unwrap();
        for (a, b) in once.points().iter().zip(twice.points()) {
            assert!((*a - *b).length() < 1e-3);
        }
    }

    #[test]
    fn test_normalize_degenerate_axis_errors() {
        // Constant y axis.
        let traj = Trajectory::from_points(vec![
            Vec3::new(0.0, 7.0, 0.0),
            Vec3::new(1.0, 7.0, 2.0),
        ]);
        assert_eq!(
            traj.normalize(1.0).unwrap_err(),
            NormalizeError::DegenerateAxis(Axis::Y)
        );

        // A single point is degenerate on all axes; x is reported first.
        let single = Trajectory::from_points(vec![Vec3::ONE]);
        assert_eq!(
            single.normalize(1.0).unwrap_err(),
            NormalizeError::DegenerateAxis(Axis::X)
        );
    }

    #[test]
    fn test_normalize_empty_errors() {
        let empty = Trajectory::from_points(vec![]);
        assert_eq!(
            empty.normalize(1.0).unwrap_err(),
            NormalizeError::EmptyTrajectory
        );
    }

    #[test]
    fn test_normalize_diverged_trajectory_errors() {
        let traj = Trajectory::from_points(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(f32::INFINITY, 1.0, 1.0),
        ]);
        assert_eq!(
            traj.normalize(1.0).unwrap_err(),
            NormalizeError::DegenerateAxis(Axis::X)
        );
    }
}
