//! Lorenz system integration.
//!
//! The Lorenz system is three coupled nonlinear differential equations
//! originally derived from a model of atmospheric convection:
//!
//! ```text
//! dx/dt = σ(y - x)
//! dy/dt = x(ρ - z) - y
//! dz/dt = xy - βz
//! ```
//!
//! For the classic parameters σ=10, ρ=28, β=8/3 the system is chaotic:
//! nearby trajectories diverge exponentially while staying bounded on the
//! butterfly-shaped attractor.
//!
//! Integration is fixed-step explicit Euler. There is no adaptive stepping
//! and no error control; the default step of 0.001 is small enough for the
//! classic parameter set, which is all this crate renders.

use glam::Vec3;

use crate::trajectory::Trajectory;

/// Parameters of a Lorenz trajectory.
///
/// Together with an initial state these fully determine the output of
/// [`integrate`](LorenzParams::integrate). The defaults are the classic
/// chaotic values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    /// Prandtl number σ.
    pub sigma: f32,
    /// Rayleigh number ρ. Chaos sets in around ρ ≈ 24.74.
    pub rho: f32,
    /// Geometric factor β.
    pub beta: f32,
    /// Integration time step.
    pub dt: f32,
    /// Number of Euler steps, and the exact length of the output trajectory.
    pub iterations: usize,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.001,
            iterations: 30_000,
        }
    }
}

impl LorenzParams {
    /// Instantaneous derivative of the system at `state`.
    pub fn derivative(&self, state: Vec3) -> Vec3 {
        Vec3::new(
            self.sigma * (state.y - state.x),
            state.x * (self.rho - state.z) - state.y,
            state.x * state.y - self.beta * state.z,
        )
    }

    /// Advance `state` by one explicit Euler step.
    pub fn step(&self, state: Vec3) -> Vec3 {
        state + self.derivative(state) * self.dt
    }

    /// Integrate a full trajectory from `initial`.
    ///
    /// Produces exactly `self.iterations` points. Each point is the state
    /// *after* a step; the initial state itself is not part of the output.
    /// Total over all real inputs - unstable parameter combinations diverge
    /// to infinity rather than erroring.
    pub fn integrate(&self, initial: Vec3) -> Trajectory {
        let mut points = Vec::with_capacity(self.iterations);
        let mut state = initial;
        for _ in 0..self.iterations {
            state = self.step(state);
            points.push(state);
        }
        Trajectory::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_length_matches_iterations() {
        let params = LorenzParams {
            iterations: 1234,
            ..Default::default()
        };
        assert_eq!(params.integrate(Vec3::ONE).len(), 1234);

        let empty = LorenzParams {
            iterations: 0,
            ..Default::default()
        };
        assert_eq!(empty.integrate(Vec3::ONE).len(), 0);
    }

    #[test]
    fn test_first_step_hand_computed() {
        // From [1,1,1] with classic parameters:
        //   dx = 10*(1-1) = 0        -> x = 1
        //   dy = 1*(28-1) - 1 = 26   -> y = 1 + 26*0.001 = 1.026
        //   dz = 1*1 - (8/3)*1       -> z = 1 - (5/3)*0.001 ~= 0.998333
        let params = LorenzParams::default();
        let traj = params.integrate(Vec3::ONE);
        let first = traj.points()[0];

        assert!((first.x - 1.0).abs() < 1e-6);
        assert!((first.y - 1.026).abs() < 1e-6);
        assert!((first.z - 0.998_333_3).abs() < 1e-6);
    }

    #[test]
    fn test_integration_is_deterministic() {
        let params = LorenzParams::default();
        let initial = Vec3::new(2.0, 4.0, 7.0);
        let a = params.integrate(initial);
        let b = params.integrate(initial);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derivative_fixed_point_at_origin() {
        // The origin is an equilibrium of the Lorenz system for all
        // parameter choices.
        let params = LorenzParams::default();
        assert_eq!(params.derivative(Vec3::ZERO), Vec3::ZERO);

        let traj = params.integrate(Vec3::ZERO);
        assert!(traj.points().iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn test_classic_trajectory_stays_bounded() {
        let params = LorenzParams::default();
        let traj = params.integrate(Vec3::ONE);
        // The attractor lives well inside |x|,|y| < 30, 0 < z < 60.
        assert!(traj.points().iter().all(|p| p.length() < 100.0));
    }
}
