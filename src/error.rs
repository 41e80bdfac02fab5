//! Error types for lorviz.
//!
//! This module provides error types for GPU initialization, screenshot
//! capture, trajectory normalization, and running the viewer.

use std::fmt;

use crate::trajectory::Axis;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// Failed to map buffer for reading.
    BufferMapping(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::BufferMapping(msg) => write!(f, "Failed to map GPU buffer: {}", msg),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while exporting a screenshot.
#[derive(Debug)]
pub enum CaptureError {
    /// Reading the rendered frame back from the GPU failed.
    Gpu(GpuError),
    /// PNG encoding failed.
    Encode(image::ImageError),
    /// Writing the file to disk failed.
    Io(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Gpu(e) => write!(f, "Failed to read back capture: {}", e),
            CaptureError::Encode(e) => write!(f, "Failed to encode screenshot: {}", e),
            CaptureError::Io(e) => write!(f, "Failed to write screenshot file: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Gpu(e) => Some(e),
            CaptureError::Encode(e) => Some(e),
            CaptureError::Io(e) => Some(e),
        }
    }
}

impl From<GpuError> for CaptureError {
    fn from(e: GpuError) -> Self {
        CaptureError::Gpu(e)
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Encode(e)
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(e: std::io::Error) -> Self {
        CaptureError::Io(e)
    }
}

/// Errors that can occur while normalizing a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// An axis has no positive finite extent, so its scale is undefined.
    DegenerateAxis(Axis),
    /// The trajectory holds no points.
    EmptyTrajectory,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::DegenerateAxis(axis) => {
                write!(f, "Trajectory is degenerate along the {} axis; cannot normalize", axis)
            }
            NormalizeError::EmptyTrajectory => write!(f, "Cannot normalize an empty trajectory"),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Errors that can occur when running the viewer.
#[derive(Debug)]
pub enum VizError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// A configured trajectory could not be normalized.
    Normalize(NormalizeError),
    /// No curves configured.
    NoCurves,
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            VizError::Window(e) => write!(f, "Failed to create window: {}", e),
            VizError::Gpu(e) => write!(f, "GPU error: {}", e),
            VizError::Normalize(e) => write!(f, "{}", e),
            VizError::NoCurves => write!(f, "No curves configured. Use .with_curve() to add at least one."),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VizError::EventLoop(e) => Some(e),
            VizError::Window(e) => Some(e),
            VizError::Gpu(e) => Some(e),
            VizError::Normalize(e) => Some(e),
            VizError::NoCurves => None,
        }
    }
}

impl From<winit::error::EventLoopError> for VizError {
    fn from(e: winit::error::EventLoopError) -> Self {
        VizError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for VizError {
    fn from(e: winit::error::OsError) -> Self {
        VizError::Window(e)
    }
}

impl From<GpuError> for VizError {
    fn from(e: GpuError) -> Self {
        VizError::Gpu(e)
    }
}

impl From<NormalizeError> for VizError {
    fn from(e: NormalizeError) -> Self {
        VizError::Normalize(e)
    }
}
