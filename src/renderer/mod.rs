//! WebGPU presentation
//!
//! Stars are rasterized on the CPU; the GPU only shows the finished frame.

pub mod framebuffer_pipeline;
pub mod gpu_surface;

pub use framebuffer_pipeline::FramebufferRenderState;
pub use gpu_surface::GpuSurface;
