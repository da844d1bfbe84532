//! Presentable surface: CPU framebuffer plus its WebGPU presenter

use super::framebuffer_pipeline::FramebufferRenderState;
use crate::raster::{PixelBuffer, Rgba, Surface};

/// Draw calls land in the framebuffer; `present` puts it on screen
pub struct GpuSurface {
    frame: PixelBuffer,
    gpu: FramebufferRenderState,
}

impl GpuSurface {
    pub fn new(gpu: FramebufferRenderState) -> Self {
        let (width, height) = gpu.size;
        Self {
            frame: PixelBuffer::new(width, height),
            gpu,
        }
    }

    /// Follow the canvas size. The simulation sees the new extent on its
    /// next query; (0, 0) is passed through as "unknown".
    pub fn resize(&mut self, width: u32, height: u32) {
        let max = self.gpu.max_dimension();
        let width = width.min(max);
        let height = height.min(max);
        if (width, height) != self.frame.extent() {
            log::info!("Surface resized to {}x{}", width, height);
            self.frame.resize(width, height);
            self.gpu.resize(width, height);
        }
    }
}

impl Surface for GpuSurface {
    type Error = wgpu::SurfaceError;

    fn extent(&self) -> (u32, u32) {
        self.frame.extent()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.frame.set_pixel(x, y, color);
    }

    fn clear(&mut self, color: Rgba) {
        self.frame.clear(color);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        match self.gpu.present(&self.frame) {
            Ok(()) => Ok(()),
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                // Skip this frame; the next one goes to a fresh swapchain
                self.gpu.reconfigure();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
