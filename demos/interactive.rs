//! Interactive attractor explorer.
//!
//! The egui panel scrubs the reveal cursor manually, switches back to the
//! time-driven reveal, and edits σ, ρ and β live - each change re-integrates
//! the curves once and re-uploads them.
//!
//! Interesting regions to explore:
//! - ρ < 1: everything collapses toward a fixed point
//! - ρ ≈ 24.74: onset of chaos
//! - ρ = 28: the classic butterfly
//!
//! Run with: `cargo run --example interactive --features egui`

use lorviz::prelude::*;

fn main() -> Result<(), VizError> {
    Viewer::new()
        .with_title("lorviz - interactive")
        .with_curve(Vec3::new(2.0, 4.0, 7.0), Vec3::new(1.0, 1.0, 0.0))
        .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.5, 0.0))
        .with_curve(Vec3::new(4.0, 3.0, 1.0), Vec3::new(0.0, 0.0, 1.0))
        // Start fully revealed; scrub from the panel.
        .with_reveal(Reveal::manual(30_000))
        .run()
}
