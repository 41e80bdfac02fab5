//! Orbit camera for viewing the attractor.

use glam::{Mat4, Vec3};

use crate::input::{Input, MouseButton};

const DRAG_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 3.0;
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 400.0;

/// Orbit camera: yaw/pitch around a target point at a fixed distance.
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
}

impl OrbitCamera {
    /// Create a camera framing the normalized attractor cube.
    pub fn new() -> Self {
        Self {
            yaw: 0.8,
            pitch: 0.3,
            distance: 80.0,
            target: Vec3::ZERO,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), aspect, 0.1, 1000.0);
        proj * self.view_matrix()
    }

    /// Apply one frame of mouse input: left-drag orbits, wheel zooms.
    pub fn handle_input(&mut self, input: &Input) {
        if input.mouse_held(MouseButton::Left) {
            let delta = input.mouse_delta();
            self.yaw -= delta.x * DRAG_SENSITIVITY;
            self.pitch += delta.y * DRAG_SENSITIVITY;
            self.pitch = self.pitch.clamp(-1.5, 1.5);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.distance -= scroll * ZOOM_STEP;
            self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_respects_distance() {
        let camera = OrbitCamera::new();
        let to_target = camera.position() - camera.target;
        assert!((to_target.length() - camera.distance).abs() < 1e-3);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let camera = OrbitCamera::new();
        let view = camera.view_matrix();
        // The target should land on the view-space -Z axis.
        let target_view = view.transform_point3(camera.target);
        assert!(target_view.x.abs() < 1e-4);
        assert!(target_view.y.abs() < 1e-4);
        assert!(target_view.z < 0.0);
    }
}
