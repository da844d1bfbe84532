//! Star field simulation
//!
//! Everything that decides where stars are lives here:
//! - Seeded RNG only (the frame loop owns a `Pcg32`)
//! - One spawn/advance/cull pass per frame
//! - Drawing goes through the `raster::Surface` contract

pub mod frame;
pub mod registry;
pub mod spawn;
pub mod star;
pub mod step;

pub use frame::{FrameStats, LoopState, StarField, run};
pub use registry::{StarId, StarRegistry};
pub use spawn::{new_star, spawn_star};
pub use star::Star;
pub use step::{FrameClock, advance, cull};
