//! Frame loop
//!
//! One iteration: poll termination, spawn on cadence, advance, cull, render,
//! present, tick. Strictly single-threaded; pacing comes from the surface's
//! present call.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::registry::StarRegistry;
use super::spawn::spawn_star;
use super::step::{FrameClock, advance, cull};
use crate::config::StarConfig;
use crate::platform::TerminationSignal;
use crate::raster::{Surface, colors, draw_filled_circle};

/// Frame loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Totals since the loop started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub spawned: u64,
    pub culled: u64,
    /// Presents that reported an error
    pub present_errors: u64,
}

/// The whole animated star field: stars, RNG, clock and config
#[derive(Debug, Clone)]
pub struct StarField {
    config: StarConfig,
    registry: StarRegistry,
    rng: Pcg32,
    clock: FrameClock,
    state: LoopState,
    stats: FrameStats,
}

impl StarField {
    /// Create an empty field with a seeded generator
    pub fn new(config: StarConfig, seed: u64) -> Self {
        log::info!(
            "Star field: profile {}, spawn every {} frames, seed {}",
            config.profile.as_str(),
            config.spawn_interval,
            seed
        );
        Self {
            config,
            registry: StarRegistry::new(),
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(),
            state: LoopState::Running,
            stats: FrameStats::default(),
        }
    }

    pub fn config(&self) -> &StarConfig {
        &self.config
    }

    pub fn registry(&self) -> &StarRegistry {
        &self.registry
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Run one iteration. Once stopped, further calls do nothing.
    pub fn frame<S, T>(&mut self, surface: &mut S, signal: &mut T) -> LoopState
    where
        S: Surface + ?Sized,
        T: TerminationSignal + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }
        if signal.requested() {
            log::info!("Termination requested after {} frames", self.clock.ticks());
            self.state = LoopState::Stopped;
            return LoopState::Stopped;
        }

        if self.clock.spawn_due(self.config.spawn_interval)
            && spawn_star(&*surface, &mut self.registry, &mut self.rng, &self.config).is_some()
        {
            self.stats.spawned += 1;
        }

        advance(&mut self.registry);
        self.stats.culled += cull(&*surface, &mut self.registry, self.config.extra_edge) as u64;

        self.render(surface);

        self.clock.tick();
        self.stats.frames += 1;
        LoopState::Running
    }

    /// Clear, draw every star, present
    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(colors::BACKGROUND);
        self.registry.for_each(|star| {
            draw_filled_circle(&mut *surface, star.pos.x as i32, star.pos.y as i32, star.size);
        });
        if let Err(e) = surface.present() {
            self.stats.present_errors += 1;
            log::warn!("Present failed: {}", e);
        }
    }

    /// Free every remaining star. Returns how many were freed.
    pub fn teardown(&mut self) -> usize {
        let freed = self.registry.clear();
        log::info!("Teardown freed {} stars", freed);
        freed
    }

    /// Iterate until termination is requested, then tear down
    pub fn run<S, T>(&mut self, surface: &mut S, signal: &mut T) -> usize
    where
        S: Surface + ?Sized,
        T: TerminationSignal + ?Sized,
    {
        while self.frame(surface, signal) == LoopState::Running {}
        self.teardown()
    }
}

/// Run a fresh star field on `surface` until `signal` fires. Cleans up all
/// star memory before returning the final totals.
pub fn run<S, T>(surface: &mut S, signal: &mut T, config: StarConfig, seed: u64) -> FrameStats
where
    S: Surface + ?Sized,
    T: TerminationSignal + ?Sized,
{
    let mut field = StarField::new(config, seed);
    field.run(surface, signal);
    field.stats()
}
