//! Integration tests for the numerical core.
//!
//! These exercise the public integrate/normalize pipeline the way the viewer
//! uses it, including randomized normalization properties.

use lorviz::{Axis, LorenzParams, NormalizeError, Trajectory, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Integrator
// ============================================================================

#[test]
fn test_integrate_produces_exact_length() {
    for iterations in [1, 100, 30_000] {
        let params = LorenzParams {
            iterations,
            ..Default::default()
        };
        let traj = params.integrate(Vec3::new(2.0, 4.0, 7.0));
        assert_eq!(traj.len(), iterations);
    }
}

#[test]
fn test_integrate_matches_manual_euler() {
    // Re-derive the first three steps by hand and compare.
    let params = LorenzParams {
        iterations: 3,
        ..Default::default()
    };
    let traj = params.integrate(Vec3::ONE);

    let mut state = Vec3::ONE;
    for point in traj.points() {
        let d = Vec3::new(
            params.sigma * (state.y - state.x),
            state.x * (params.rho - state.z) - state.y,
            state.x * state.y - params.beta * state.z,
        );
        state += d * params.dt;
        assert!((state - *point).length() < 1e-6);
    }
}

#[test]
fn test_nearby_seeds_diverge() {
    // Chaos: a 1e-3 perturbation grows to macroscopic separation.
    let params = LorenzParams::default();
    let a = params.integrate(Vec3::new(1.0, 1.0, 1.0));
    let b = params.integrate(Vec3::new(1.001, 1.0, 1.0));

    let early = (a.points()[10] - b.points()[10]).length();
    let late = a.points()[29_000..]
        .iter()
        .zip(&b.points()[29_000..])
        .map(|(p, q)| (*p - *q).length())
        .fold(0.0f32, f32::max);
    assert!(early < 0.01);
    assert!(late > 1.0);
}

// ============================================================================
// Normalizer
// ============================================================================

fn random_trajectory(rng: &mut StdRng, len: usize) -> Trajectory {
    let points = (0..len)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-40.0..40.0),
                rng.gen_range(0.0..80.0),
            )
        })
        .collect();
    Trajectory::from_points(points)
}

#[test]
fn test_normalize_random_trajectories_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let traj = random_trajectory(&mut rng, 200);
        let upper = rng.gen_range(1.0..100.0);
        let norm = traj.normalize(upper).unwrap();

        assert_eq!(norm.len(), traj.len());
        let bounds = norm.bounds().unwrap();
        // Every coordinate in [0, upper], extrema mapped onto the ends.
        assert!(bounds.min.min_element() >= -1e-3);
        assert!(bounds.max.max_element() <= upper + 1e-3);
        assert!(bounds.min.max_element() < 1e-3);
        assert!((bounds.max.min_element() - upper).abs() < 1e-2);
    }
}

#[test]
fn test_normalize_preserves_relative_position() {
    // Normalization is affine per axis: midpoints stay midpoints.
    let traj = Trajectory::from_points(vec![
        Vec3::new(-10.0, 0.0, 5.0),
        Vec3::new(0.0, 4.0, 10.0),
        Vec3::new(10.0, 8.0, 15.0),
    ]);
    let norm = traj.normalize(2.0).unwrap();
    assert!((norm.points()[1] - Vec3::ONE).length() < 1e-5);
}

#[test]
fn test_normalize_full_pipeline() {
    // The exact pipeline the viewer runs at startup.
    let params = LorenzParams::default();
    let norm = params
        .integrate(Vec3::new(6.0, 0.0, 1.0))
        .normalize(50.0)
        .unwrap();

    assert_eq!(norm.len(), 30_000);
    for p in norm.points() {
        assert!(p.is_finite());
        assert!(p.min_element() >= 0.0 && p.max_element() <= 50.0);
    }
}

#[test]
fn test_degenerate_axis_reports_which() {
    let flat_z = Trajectory::from_points(vec![
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(1.0, 2.0, 3.0),
    ]);
    assert_eq!(
        flat_z.normalize(10.0).unwrap_err(),
        NormalizeError::DegenerateAxis(Axis::Z)
    );
}
