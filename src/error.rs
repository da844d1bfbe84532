//! Error types

use thiserror::Error;

/// Rejected configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Lower bound is not below the upper bound
    #[error("invalid {name} range: {min}..{max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// Drift stars must always move left, so the horizontal minimum must be positive
    #[error("min_speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("spawn_interval must be at least 1")]
    ZeroSpawnInterval,

    #[error("max_size must be at least 1")]
    ZeroMaxSize,

    #[error("max_size {size} exceeds the limit of {limit}")]
    SizeTooLarge { size: u32, limit: u32 },

    #[error("extra_edge must not be negative, got {0}")]
    NegativeEdge(f32),

    /// Stars would be culled while still partly visible
    #[error("extra_edge {edge} is smaller than max_size {max_size}")]
    EdgeBelowSize { edge: f32, max_size: u32 },

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform or GPU setup failure. Fatal: the frame loop never starts.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface reports no usable texture format
    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,

    /// Browser page is missing something we need (window, document, canvas)
    #[error("page setup failed: {0}")]
    Page(String),
}
