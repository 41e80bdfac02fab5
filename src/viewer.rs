//! Viewer builder and animation loop.
//!
//! The [`Viewer`] is configured with method chaining and started with
//! [`run()`](Viewer::run), which blocks until the window is closed:
//!
//! ```ignore
//! Viewer::new()
//!     .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0))
//!     .with_reveal(Reveal::clock(500.0))
//!     .run()?;
//! ```
//!
//! Every configured curve is integrated, normalized and uploaded to the GPU
//! once up front; the per-frame work is limited to advancing the reveal
//! cursor and issuing draw calls. All animation state (clock, input, camera,
//! cursor) lives in the `App` struct that drives the winit event loop -
//! nothing global.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

use crate::attractor::LorenzParams;
use crate::camera::OrbitCamera;
use crate::error::{NormalizeError, VizError};
use crate::gpu::GpuState;
#[cfg(feature = "egui")]
use crate::gpu::EguiIntegration;
use crate::input::{Input, KeyCode};
use crate::time::Clock;
use crate::trajectory::Trajectory;

/// How the visible length of each curve is chosen every frame.
///
/// `Clock` reveals the trajectory over wall-clock time; `Manual` pins the
/// cursor to a fixed value (scrubbed from the control panel when the `egui`
/// feature is enabled). The two modes are independent - switching to manual
/// never has the clock silently overwrite the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    /// Cursor = elapsed seconds x `points_per_second`, clamped to the
    /// trajectory length.
    Clock { points_per_second: f32 },
    /// Cursor fixed at `cursor`, clamped to the trajectory length.
    Manual { cursor: u32 },
}

impl Reveal {
    /// Time-driven reveal at the given rate.
    pub fn clock(points_per_second: f32) -> Self {
        Reveal::Clock { points_per_second }
    }

    /// Fixed cursor.
    pub fn manual(cursor: u32) -> Self {
        Reveal::Manual { cursor }
    }

    /// Visible point count for a curve of length `len` at time `elapsed`.
    pub fn cursor(&self, elapsed: f32, len: u32) -> u32 {
        match *self {
            Reveal::Clock { points_per_second } => {
                ((elapsed * points_per_second).max(0.0) as u32).min(len)
            }
            Reveal::Manual { cursor } => cursor.min(len),
        }
    }
}

impl Default for Reveal {
    /// Time-driven reveal at 500 points per second.
    fn default() -> Self {
        Reveal::Clock {
            points_per_second: 500.0,
        }
    }
}

/// One configured curve: an initial condition and a line color.
#[derive(Debug, Clone, Copy)]
pub struct CurveSpec {
    pub initial: Vec3,
    pub color: Vec3,
}

/// Builder for the attractor viewer.
pub struct Viewer {
    params: LorenzParams,
    curves: Vec<CurveSpec>,
    upper_limit: f32,
    reveal: Reveal,
    background: Vec3,
    title: String,
}

impl Viewer {
    /// Create a viewer with default settings and no curves.
    pub fn new() -> Self {
        Self {
            params: LorenzParams::default(),
            curves: Vec::new(),
            upper_limit: 50.0,
            reveal: Reveal::default(),
            background: Vec3::new(0.02, 0.02, 0.05),
            title: "lorviz".to_string(),
        }
    }

    /// Add a curve from `initial` drawn in `color` (RGB, 0.0-1.0).
    pub fn with_curve(mut self, initial: Vec3, color: Vec3) -> Self {
        self.curves.push(CurveSpec { initial, color });
        self
    }

    /// Set the attractor parameters shared by all curves.
    pub fn with_params(mut self, params: LorenzParams) -> Self {
        self.params = params;
        self
    }

    /// Set the upper bound of the normalized coordinate cube.
    pub fn with_upper_limit(mut self, upper_limit: f32) -> Self {
        self.upper_limit = upper_limit;
        self
    }

    /// Set the reveal mode.
    pub fn with_reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    /// Set the window clear color (RGB, 0.0-1.0).
    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background = color;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the viewer. Blocks until the window is closed.
    ///
    /// Integrates and normalizes every curve before opening a window, so
    /// configuration errors (such as a degenerate trajectory) surface
    /// immediately as an `Err` instead of NaN geometry.
    pub fn run(self) -> Result<(), VizError> {
        if self.curves.is_empty() {
            return Err(VizError::NoCurves);
        }

        let polylines = build_polylines(&self.params, &self.curves, self.upper_limit)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self, polylines);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Integrate and normalize every configured curve into display space.
fn build_polylines(
    params: &LorenzParams,
    curves: &[CurveSpec],
    upper_limit: f32,
) -> Result<Vec<Vec<Vec3>>, NormalizeError> {
    curves
        .iter()
        .map(|spec| {
            let normalized = params.integrate(spec.initial).normalize(upper_limit)?;
            Ok(to_display(&normalized, upper_limit))
        })
        .collect()
}

/// Map normalized points into display space: the attractor's z axis becomes
/// the vertical, and the `[0, upper]` cube is centered on the origin.
fn to_display(trajectory: &Trajectory, upper_limit: f32) -> Vec<Vec3> {
    let half = upper_limit * 0.5;
    trajectory
        .points()
        .iter()
        .map(|p| Vec3::new(p.x - half, p.z - half, p.y - half))
        .collect()
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

fn capture_path() -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("attractor-{}.png", stamp))
}

/// All animation state for one viewer run.
struct App {
    config: Viewer,
    /// Display-space points per curve, computed once per parameter set.
    polylines: Vec<Vec<Vec3>>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    clock: Clock,
    input: Input,
    camera: OrbitCamera,
    reveal: Reveal,
    #[cfg(feature = "egui")]
    egui: Option<EguiIntegration>,
    #[cfg(feature = "egui")]
    panel: ControlPanel,
    error: Option<VizError>,
}

impl App {
    fn new(config: Viewer, polylines: Vec<Vec<Vec3>>) -> Self {
        let reveal = config.reveal;
        #[cfg(feature = "egui")]
        let panel = ControlPanel::new(&config, &reveal);
        Self {
            config,
            polylines,
            window: None,
            gpu: None,
            clock: Clock::new(),
            input: Input::new(),
            camera: OrbitCamera::new(),
            reveal,
            #[cfg(feature = "egui")]
            egui: None,
            #[cfg(feature = "egui")]
            panel,
            error: None,
        }
    }

    fn upload_all(&mut self) {
        if let Some(gpu) = &mut self.gpu {
            for (slot, (line, spec)) in self.polylines.iter().zip(&self.config.curves).enumerate() {
                gpu.upload_curve(slot, line, spec.color);
            }
        }
    }

    /// Visible point count for each curve this frame.
    fn visible_counts(&self) -> Vec<u32> {
        let elapsed = self.clock.elapsed();
        self.polylines
            .iter()
            .map(|line| self.reveal.cursor(elapsed, line.len() as u32))
            .collect()
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.update();

        if self.input.key_pressed(KeyCode::Space) {
            self.clock.reset();
        }
        if self.input.double_clicked() || self.input.key_pressed(KeyCode::F11) {
            if let Some(window) = &self.window {
                toggle_fullscreen(window);
            }
        }
        self.camera.handle_input(&self.input);

        if self.input.key_pressed(KeyCode::M) {
            if let Some(gpu) = &self.gpu {
                let aspect = crate::gpu::CAPTURE_WIDTH as f32 / crate::gpu::CAPTURE_HEIGHT as f32;
                let path = capture_path();
                if let Err(e) = gpu.capture_png(
                    self.camera.view_proj(aspect),
                    &self.visible_counts(),
                    crate::gpu::CAPTURE_WIDTH,
                    crate::gpu::CAPTURE_HEIGHT,
                    &path,
                ) {
                    eprintln!("Capture error: {}", e);
                }
            }
        }

        #[cfg(feature = "egui")]
        let ui_output = self.run_panel();

        let visible = self.visible_counts();

        if let Some(gpu) = &mut self.gpu {
            let aspect = gpu.config.width as f32 / gpu.config.height.max(1) as f32;
            let view_proj = self.camera.view_proj(aspect);

            #[cfg(feature = "egui")]
            let result = gpu.render(
                view_proj,
                &visible,
                match (&mut self.egui, &ui_output) {
                    (Some(integration), Some(output)) => Some((integration, output)),
                    _ => None,
                },
            );
            #[cfg(not(feature = "egui"))]
            let result = gpu.render(view_proj, &visible);

            match result {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        #[cfg(feature = "egui")]
        if let (Some(integration), Some(output)) = (&mut self.egui, &ui_output) {
            integration.cleanup(output);
        }

        self.input.end_frame();
    }

    /// Run the control panel and apply its edits to the scene.
    #[cfg(feature = "egui")]
    fn run_panel(&mut self) -> Option<crate::gpu::EguiFrameOutput> {
        let window = self.window.as_ref()?.clone();
        let integration = self.egui.as_mut()?;

        integration.begin_frame(&window);
        let max_cursor = self
            .polylines
            .iter()
            .map(|line| line.len() as u32)
            .max()
            .unwrap_or(0);
        let response = self
            .panel
            .show(&integration.ctx, &mut self.reveal, max_cursor, self.clock.fps());
        let output = integration.end_frame(&window);

        if response.reset_clock {
            self.clock.reset();
        }
        if response.params_changed {
            match build_polylines(&self.panel.params, &self.config.curves, self.config.upper_limit)
            {
                Ok(polylines) => {
                    self.config.params = self.panel.params;
                    self.polylines = polylines;
                    self.upload_all();
                }
                // Keep showing the previous curves; the panel state stays so
                // the user can slide back out of the bad region.
                Err(e) => eprintln!("Parameter change rejected: {}", e),
            }
        }

        Some(output)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window.clone(), self.config.background)) {
            Ok(gpu) => {
                #[cfg(feature = "egui")]
                {
                    self.egui = Some(EguiIntegration::new(
                        gpu.device(),
                        gpu.config.format,
                        &window,
                    ));
                }
                self.gpu = Some(gpu);
                self.upload_all();
            }
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        let consumed = match (&mut self.egui, &self.window) {
            (Some(integration), Some(window)) => integration.on_window_event(window, &event),
            _ => false,
        };
        #[cfg(not(feature = "egui"))]
        let consumed = false;

        if !consumed {
            self.input.handle_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.input.set_window_size(physical_size.width, physical_size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Slider state for the egui control panel.
#[cfg(feature = "egui")]
struct ControlPanel {
    params: LorenzParams,
    points_per_second: f32,
    manual_cursor: u32,
}

#[cfg(feature = "egui")]
struct PanelResponse {
    params_changed: bool,
    reset_clock: bool,
}

#[cfg(feature = "egui")]
impl ControlPanel {
    fn new(config: &Viewer, reveal: &Reveal) -> Self {
        let (points_per_second, manual_cursor) = match *reveal {
            Reveal::Clock { points_per_second } => {
                (points_per_second, config.params.iterations as u32)
            }
            Reveal::Manual { cursor } => (500.0, cursor),
        };
        Self {
            params: config.params,
            points_per_second,
            manual_cursor,
        }
    }

    fn show(
        &mut self,
        ctx: &egui::Context,
        reveal: &mut Reveal,
        max_cursor: u32,
        fps: f32,
    ) -> PanelResponse {
        let mut response = PanelResponse {
            params_changed: false,
            reset_clock: false,
        };

        egui::Window::new("Lorenz Attractor")
            .default_pos([10.0, 10.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Reveal");

                let mut manual = matches!(reveal, Reveal::Manual { .. });
                ui.horizontal(|ui| {
                    if ui.selectable_label(!manual, "Clock").clicked() {
                        manual = false;
                    }
                    if ui.selectable_label(manual, "Manual").clicked() {
                        manual = true;
                    }
                });

                if manual {
                    self.manual_cursor = self.manual_cursor.min(max_cursor);
                    ui.add(
                        egui::Slider::new(&mut self.manual_cursor, 1..=max_cursor.max(1))
                            .text("Visible points"),
                    );
                    *reveal = Reveal::Manual {
                        cursor: self.manual_cursor,
                    };
                } else {
                    ui.add(
                        egui::Slider::new(&mut self.points_per_second, 50.0..=5000.0)
                            .text("Points per second")
                            .step_by(50.0),
                    );
                    if ui.button("Restart").clicked() {
                        response.reset_clock = true;
                    }
                    *reveal = Reveal::Clock {
                        points_per_second: self.points_per_second,
                    };
                }

                ui.separator();
                ui.heading("Parameters");

                let sigma = ui.add(
                    egui::Slider::new(&mut self.params.sigma, 0.0..=30.0)
                        .text("σ (sigma)")
                        .step_by(0.1),
                );
                let rho = ui.add(
                    egui::Slider::new(&mut self.params.rho, 0.0..=50.0)
                        .text("ρ (rho)")
                        .step_by(0.1),
                );
                let beta = ui.add(
                    egui::Slider::new(&mut self.params.beta, 0.0..=10.0)
                        .text("β (beta)")
                        .step_by(0.01),
                );
                response.params_changed |=
                    sigma.changed() || rho.changed() || beta.changed();

                if ui.button("Classic").clicked() {
                    self.params.sigma = 10.0;
                    self.params.rho = 28.0;
                    self.params.beta = 8.0 / 3.0;
                    response.params_changed = true;
                }

                ui.separator();
                ui.label(format!("{:.0} fps", fps));
                ui.label("Space: restart reveal / M: save 4K PNG");
                ui.label("Double-click or F11: fullscreen");
            });

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_reveal_tracks_elapsed_time() {
        let reveal = Reveal::clock(500.0);
        assert_eq!(reveal.cursor(0.0, 30_000), 0);
        assert_eq!(reveal.cursor(1.0, 30_000), 500);
        assert_eq!(reveal.cursor(10.0, 30_000), 5_000);
        // Clamped once the whole trajectory is revealed
        assert_eq!(reveal.cursor(120.0, 30_000), 30_000);
    }

    #[test]
    fn test_manual_reveal_honors_cursor() {
        let reveal = Reveal::manual(1234);
        assert_eq!(reveal.cursor(0.0, 30_000), 1234);
        // Time has no effect in manual mode
        assert_eq!(reveal.cursor(999.0, 30_000), 1234);
        // Still clamped to the trajectory length
        assert_eq!(reveal.cursor(0.0, 1000), 1000);
    }

    #[test]
    fn test_build_polylines_centers_output() {
        let params = LorenzParams {
            iterations: 2_000,
            ..Default::default()
        };
        let curves = [CurveSpec {
            initial: Vec3::ONE,
            color: Vec3::ONE,
        }];
        let upper = 50.0;
        let lines = build_polylines(&params, &curves, upper).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 2_000);
        let half = upper * 0.5;
        for p in &lines[0] {
            assert!(p.x >= -half - 1e-3 && p.x <= half + 1e-3);
            assert!(p.y >= -half - 1e-3 && p.y <= half + 1e-3);
            assert!(p.z >= -half - 1e-3 && p.z <= half + 1e-3);
        }
    }

    #[test]
    fn test_display_transform_swaps_vertical_axis() {
        let traj = Trajectory::from_points(vec![Vec3::new(1.0, 2.0, 3.0)]);
        let display = to_display(&traj, 0.0);
        // Attractor z becomes the display vertical
        assert_eq!(display[0], Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_run_without_curves_errors() {
        let result = Viewer::new().run();
        assert!(matches!(result, Err(VizError::NoCurves)));
    }
}
