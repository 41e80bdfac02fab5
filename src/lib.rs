//! # lorviz
//!
//! Animated 3D visualization of the Lorenz strange attractor.
//!
//! A fixed-step Euler integrator traces trajectories of the Lorenz system
//! from a set of initial conditions, a per-axis normalizer rescales them into
//! a shared coordinate cube, and a wgpu-based viewer draws them as polylines
//! revealed progressively over time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lorviz::prelude::*;
//!
//! fn main() -> Result<(), VizError> {
//!     Viewer::new()
//!         .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0))
//!         .with_curve(Vec3::new(2.0, 4.0, 7.0), Vec3::new(1.0, 1.0, 0.0))
//!         .with_reveal(Reveal::clock(500.0))
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Trajectories
//!
//! [`LorenzParams`] holds the attractor coefficients plus the time step and
//! iteration count; [`LorenzParams::integrate`] turns an initial state into a
//! [`Trajectory`] of exactly `iterations` points. Integration happens once
//! per configuration - the animation only moves a cursor through the
//! precomputed points.
//!
//! ### Normalization
//!
//! [`Trajectory::normalize`] rescales each axis independently into
//! `[0, upper_limit]`. A trajectory that never moves along some axis has no
//! defined scale there; that is reported as [`NormalizeError::DegenerateAxis`]
//! instead of producing NaN geometry.
//!
//! ### Reveal
//!
//! [`Reveal`] picks the visible prefix of each curve every frame: `Clock`
//! grows it with wall-clock time (Space restarts it), `Manual` pins it to a
//! fixed cursor. With the `egui` feature a control panel scrubs the cursor
//! and edits the attractor parameters live.
//!
//! ### Window controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Left drag / wheel | Orbit / zoom the camera |
//! | Space | Restart the reveal clock |
//! | M | Save a 4K PNG screenshot |
//! | Double-click or F11 | Toggle fullscreen |

pub mod attractor;
pub mod camera;
mod error;
mod gpu;
pub mod input;
pub mod time;
pub mod trajectory;
mod viewer;

pub use attractor::LorenzParams;
pub use camera::OrbitCamera;
pub use error::{CaptureError, GpuError, NormalizeError, VizError};
pub use glam::{Vec2, Vec3};
pub use trajectory::{Axis, Bounds, Trajectory};
pub use viewer::{CurveSpec, Reveal, Viewer};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use lorviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attractor::LorenzParams;
    pub use crate::camera::OrbitCamera;
    pub use crate::error::{NormalizeError, VizError};
    pub use crate::input::{Input, KeyCode, MouseButton};
    pub use crate::time::Clock;
    pub use crate::trajectory::{Axis, Bounds, Trajectory};
    pub use crate::viewer::{CurveSpec, Reveal, Viewer};
    pub use crate::{Vec2, Vec3};
    #[cfg(feature = "egui")]
    pub use egui;
}
