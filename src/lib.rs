//! Star Wallpaper - A drifting star field animated background
//!
//! Core modules:
//! - `sim`: Star registry, spawning, movement, culling and the frame loop
//! - `raster`: Drawable surface contract and the midpoint circle rasterizer
//! - `renderer`: WebGPU presenter for the CPU framebuffer
//! - `platform`: Termination signals for browser and headless runs
//! - `config`: Runtime tuning (spawn cadence, speeds, motion profile)

pub mod config;
pub mod error;
pub mod platform;
pub mod raster;
pub mod renderer;
pub mod sim;

pub use config::{SpawnProfile, StarConfig};
pub use error::{ConfigError, InitError};
pub use sim::{LoopState, StarField, run};

/// Default tuning constants
pub mod consts {
    /// Frames between spawns
    pub const SPAWN_INTERVAL: u32 = 40;

    /// Horizontal drift speed range (pixels/frame)
    pub const MIN_SPEED: f32 = 0.25;
    pub const MAX_SPEED: f32 = 1.0;

    /// Vertical skew speed range (pixels/frame), Drift profile only
    pub const MIN_SPEED_Y: f32 = 0.0;
    pub const MAX_SPEED_Y: f32 = 0.1;

    /// Exclusive upper bound on star radius
    pub const MAX_SIZE: u32 = 10;

    /// Largest accepted `max_size`
    pub const MAX_SIZE_LIMIT: u32 = 1024;

    /// Margin beyond the visible extent before a star is culled
    pub const EXTRA_EDGE: f32 = MAX_SIZE as f32;

    /// Spawn jitter window around the screen center (Burst profile)
    pub const CENTER_VAR_X: u32 = 100;
    pub const CENTER_VAR_Y: u32 = 100;

    /// Headless surface size used by the native binary
    pub const HEADLESS_WIDTH: u32 = 1000;
    pub const HEADLESS_HEIGHT: u32 = 800;
}
