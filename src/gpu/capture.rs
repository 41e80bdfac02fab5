//! High-resolution screenshot export.
//!
//! Renders the scene into an offscreen texture at a fixed 4K resolution,
//! reads the pixels back over a padded staging buffer, and writes a PNG.

use std::path::Path;

use glam::Mat4;
use image::ImageEncoder;
use wgpu::util::DeviceExt;

use super::{create_depth_texture, draw_curves, GpuState, Uniforms};
use crate::error::{CaptureError, GpuError};

/// Fixed export resolution (4K UHD).
pub(crate) const CAPTURE_WIDTH: u32 = 3840;
pub(crate) const CAPTURE_HEIGHT: u32 = 2160;

/// Bytes per row of a readback buffer, padded to wgpu's copy alignment (256).
pub(crate) fn padded_bytes_per_row(width: u32) -> u32 {
    (width * 4).div_ceil(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT) * wgpu::COPY_BYTES_PER_ROW_ALIGNMENT
}

impl GpuState {
    /// Render the current curves offscreen at `width`x`height` and save a PNG.
    ///
    /// Uses the surface format (so the live pipeline is reused) and a capture
    /// local uniform buffer, leaving the on-screen frame state untouched.
    pub fn capture_png(
        &self,
        view_proj: Mat4,
        visible: &[u32],
        width: u32,
        height: u32,
        path: &Path,
    ) -> Result<(), CaptureError> {
        let target = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Capture Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let depth_texture = create_depth_texture(&self.device, width, height);

        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
        };
        let uniform_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Capture Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let uniform_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Capture Uniform Bind Group"),
            layout: &self.uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let bytes_per_row = padded_bytes_per_row(width);
        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Capture Readback Buffer"),
            size: bytes_per_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Capture Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Capture Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            draw_curves(
                &mut render_pass,
                &self.render_pipeline,
                &uniform_bind_group,
                &self.curves,
                visible,
            );
        }

        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        let buffer_slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            tx.send(result).ok();
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|_| GpuError::BufferMapping("map_async callback dropped".into()))?
            .map_err(|e| GpuError::BufferMapping(e.to_string()))?;

        let pixels = {
            let data = buffer_slice.get_mapped_range();
            strip_row_padding(&data, width, height, bytes_per_row, is_bgra(self.config.format))
        };
        readback.unmap();

        let mut png = Vec::new();
        image::codecs::png::PngEncoder::new(&mut png).write_image(
            &pixels,
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )?;
        std::fs::write(path, png)?;

        Ok(())
    }
}

fn is_bgra(format: wgpu::TextureFormat) -> bool {
    matches!(
        format,
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
    )
}

/// Compact padded readback rows into tight RGBA, swizzling BGRA if needed.
fn strip_row_padding(
    data: &[u8],
    width: u32,
    height: u32,
    bytes_per_row: u32,
    swap_rb: bool,
) -> Vec<u8> {
    let row_bytes = width as usize * 4;
    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * bytes_per_row as usize;
        pixels.extend_from_slice(&data[start..start + row_bytes]);
    }
    if swap_rb {
        for px in pixels.chunks_exact_mut(4) {
            px.swap(0, 2);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bytes_per_row() {
        // Already aligned: 3840 * 4 = 15360 = 60 * 256.
        assert_eq!(padded_bytes_per_row(CAPTURE_WIDTH), 15_360);
        // Unaligned width rounds up to the next multiple of 256.
        assert_eq!(padded_bytes_per_row(100), 512);
        for width in [1, 100, 640, 1280, 1921, CAPTURE_WIDTH] {
            let padded = padded_bytes_per_row(width);
            assert_eq!(padded % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT, 0);
            assert!(padded >= width * 4);
        }
    }

    #[test]
    fn test_strip_row_padding() {
        // 2x2 image, rows padded to 12 bytes.
        let mut data = vec![0u8; 24];
        data[0..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        data[12..20].copy_from_slice(&[9, 10, 11, 12, 13, 14, 15, 16]);

        let tight = strip_row_padding(&data, 2, 2, 12, false);
        assert_eq!(tight, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);

        let swizzled = strip_row_padding(&data, 2, 2, 12, true);
        assert_eq!(&swizzled[0..4], &[3, 2, 1, 4]);
    }
}
