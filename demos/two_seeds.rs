//! Sensitive dependence on initial conditions.
//!
//! Two seeds that differ by one part in a thousand trace visibly different
//! paths within a few thousand steps - the hallmark of deterministic chaos.
//! Watch the cyan and orange lines shadow each other, then split.
//!
//! Run with: `cargo run --example two_seeds`

use lorviz::prelude::*;

fn main() -> Result<(), VizError> {
    let params = LorenzParams {
        iterations: 60_000,
        ..Default::default()
    };

    Viewer::new()
        .with_title("lorviz - diverging seeds")
        .with_params(params)
        .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.8, 1.0))
        .with_curve(Vec3::new(1.001, 1.0, 1.0), Vec3::new(1.0, 0.5, 0.1))
        .with_reveal(Reveal::clock(1_000.0))
        .run()
}
