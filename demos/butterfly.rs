//! Classic Lorenz butterfly from a single seed.
//!
//! One trajectory with the classic parameters σ=10, ρ=28, β=8/3, revealed
//! at a fast rate so the two wings fill in within a few seconds.
//!
//! Run with: `cargo run --example butterfly`

use lorviz::prelude::*;

fn main() -> Result<(), VizError> {
    Viewer::new()
        .with_title("lorviz - butterfly")
        .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.2, 0.9, 0.6))
        .with_reveal(Reveal::clock(2_000.0))
        .with_background(Vec3::new(0.01, 0.01, 0.02))
        .run()
}
